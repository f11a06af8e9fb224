use curv_motion::RevealOptions;
use curv_motion::scroll::{ScrollRange, Transform};
use leptos::prelude::*;

use super::site_config;
use crate::content::STATS;
use crate::hooks::{reveal_class, use_count_up, use_reveal, use_scroll_progress};

const IMAGE_Y_PERCENT: Transform = Transform::new([0.0, 1.0], [20.0, -20.0]);
const IMAGE_SCALE: Transform = Transform::new([0.0, 0.5], [1.2, 1.0]);

#[component]
pub fn About() -> impl IntoView {
    let config = site_config();
    let business = config.business;

    let section = NodeRef::<leptos::html::Section>::new();
    let text = NodeRef::<leptos::html::Div>::new();
    let badge = NodeRef::<leptos::html::Div>::new();

    let progress = use_scroll_progress(section, ScrollRange::StartEndToEndStart);
    let shown = use_reveal(text, config.reveal.section);
    let badge_shown = use_reveal(badge, RevealOptions::IMMEDIATE);
    let year = use_count_up(config.counter.count_up(), badge_shown);

    let image_style = move || {
        let p = progress.get();
        format!(
            "transform: translateY({}%) scale({});",
            IMAGE_Y_PERCENT.apply(p),
            IMAGE_SCALE.apply(p)
        )
    };

    view! {
        <section id="about" class="about section-snap" node_ref=section>
            <div class="container about-grid">
                <div class=reveal_class("about-media slide-from-left", shown)>
                    <div class="about-image" style=image_style>
                        <img src="assets/about-showroom.jpg" alt=format!("{} Showroom", business.name) />
                    </div>
                    <div class="about-frame"></div>
                    <div class=reveal_class("about-badge", badge_shown) node_ref=badge>
                        <p class="about-badge-label">"Serving Since"</p>
                        <p class="about-badge-year gradient-primary">{move || year.get().to_string()}</p>
                    </div>
                </div>

                <div class=reveal_class("about-text", shown) node_ref=text>
                    <span class="eyebrow accent">"About Us"</span>
                    <h2 class="section-title">
                        "Crafting " <span class="gradient-gold">"Excellence"</span> " in Every Tile"
                    </h2>
                    <p class="about-lead">
                        {format!(
                            "At {} {}, we believe that every space deserves to be extraordinary. \
                             Since our establishment in {}, we've been dedicated to bringing you the \
                             finest selection of premium tiles and artificial granite that combine \
                             aesthetic beauty with exceptional durability.",
                            business.name, business.tagline, business.established
                        )}
                    </p>
                    <p class="about-body">
                        "Our curated collection features designs from world-renowned brands including AGL, "
                        "ensuring that you have access to the latest trends and timeless classics in tile design."
                    </p>

                    <div class="stats">
                        {STATS
                            .iter()
                            .map(|stat| view! {
                                <div class="stat">
                                    <p class="stat-value">{stat.value}</p>
                                    <p class="stat-label">{stat.label}</p>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="about-cta">
                        <a href="#contact" class="btn btn-gold">"Visit Our Showroom"</a>
                    </div>
                </div>
            </div>
            <div class=reveal_class("section-rule from-left", shown)></div>
        </section>
    }
}
