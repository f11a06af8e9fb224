use curv_motion::scroll::{ScrollRange, Transform};
use leptos::prelude::*;

use super::site_config;
use crate::content::{HEADLINE_WORDS, TAGLINE_WORDS};
use crate::hooks::use_scroll_progress;

// Parallax over the hero's own height
const BACKDROP_Y_PERCENT: Transform = Transform::new([0.0, 1.0], [0.0, 50.0]);
const BACKDROP_SCALE: Transform = Transform::new([0.0, 0.5], [1.0, 0.8]);
const CONTENT_OPACITY: Transform = Transform::new([0.0, 0.5], [1.0, 0.0]);
const CONTENT_Y_PERCENT: Transform = Transform::new([0.0, 0.5], [0.0, -30.0]);

#[component]
pub fn Hero() -> impl IntoView {
    let business = site_config().business;
    let section = NodeRef::<leptos::html::Section>::new();
    let progress = use_scroll_progress(section, ScrollRange::StartStartToEndStart);

    let backdrop_style = move || {
        let p = progress.get();
        format!(
            "transform: translateY({}%) scale({});",
            BACKDROP_Y_PERCENT.apply(p),
            BACKDROP_SCALE.apply(p)
        )
    };
    let content_style = move || {
        let p = progress.get();
        format!(
            "opacity: {}; transform: translateY({}%);",
            CONTENT_OPACITY.apply(p),
            CONTENT_Y_PERCENT.apply(p)
        )
    };
    let established = format!("Established {}", business.established);

    view! {
        <section id="hero" class="hero section-snap" node_ref=section>
            <div class="hero-backdrop" style=backdrop_style>
                <div class="hero-backdrop-shade"></div>
                <img src="assets/hero-tiles.jpg" alt="Luxury marble tiles" />
            </div>

            // Floating geometry
            <div class="hero-shape hero-shape-diamond"></div>
            <div class="hero-shape hero-shape-square"></div>
            <div class="hero-shape hero-shape-small"></div>

            <div class="hero-content" style=content_style>
                <div class="container">
                    <div class="hero-badge fade-up" style="animation-delay: 200ms">
                        {established}
                    </div>

                    <h1 class="hero-title">
                        {HEADLINE_WORDS
                            .iter()
                            .enumerate()
                            .map(|(i, word)| {
                                let class = if i == 0 { "hero-word gradient-primary" } else { "hero-word" };
                                let delay = format!("animation-delay: {}ms", 300 + i * 150);
                                view! { <span class=class style=delay>{*word}</span> }
                            })
                            .collect::<Vec<_>>()}
                    </h1>
                    <h2 class="hero-tagline">
                        {TAGLINE_WORDS
                            .iter()
                            .enumerate()
                            .map(|(i, word)| {
                                let class = if i == 0 { "hero-word accent" } else { "hero-word muted" };
                                let delay = format!("animation-delay: {}ms", 600 + i * 150);
                                view! { <span class=class style=delay>{*word}</span> }
                            })
                            .collect::<Vec<_>>()}
                    </h2>

                    <div class="hero-actions fade-up" style="animation-delay: 1000ms">
                        <a href="#products" class="btn btn-luxury">"Explore Collection"</a>
                        <a href=business.map_url.clone() target="_blank" class="hero-location">
                            <span class="hero-location-pin pulse-glow">"⌖"</span>
                            <span>
                                <span class="hero-location-label">"Visit Us"</span>
                                <span class="hero-location-address">{business.address.clone()}</span>
                            </span>
                        </a>
                    </div>
                </div>

                <div class="hero-scroll fade-in" style="animation-delay: 1500ms">
                    <span>"Scroll"</span>
                    <span class="hero-scroll-chevron">"⌄"</span>
                </div>
            </div>

            <div class="hero-side-text fade-in" style="animation-delay: 1200ms">
                "Premium Tiles & Artificial Granite"
            </div>
        </section>
    }
}
