use leptos::prelude::*;

use super::site_config;
use crate::content::{BRAND_BELT_REPEATS, BRANDS};
use crate::hooks::{reveal_class, use_reveal};

#[component]
pub fn Brands() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let shown = use_reveal(section, site_config().reveal.section);

    let belt = std::iter::repeat_n(BRANDS, BRAND_BELT_REPEATS)
        .flatten()
        .map(|brand| view! { <span class="brand-belt-item">{brand.name}</span> })
        .collect::<Vec<_>>();

    view! {
        <section id="brands" class="brands section-snap" node_ref=section>
            <div class="container">
                <div class=reveal_class("section-head", shown)>
                    <span class="eyebrow primary">"Trusted Partners"</span>
                    <h2 class="section-title">
                        "Premium " <span class="gradient-primary">"Brands"</span>
                    </h2>
                </div>

                <div class=reveal_class("brand-grid", shown)>
                    {BRANDS
                        .iter()
                        .enumerate()
                        .map(|(i, brand)| {
                            let class = if brand.featured { "brand-tile featured" } else { "brand-tile" };
                            let delay = format!("--stagger: {}ms", 200 + i * 100);
                            view! {
                                <div class=class style=delay>
                                    {brand.featured.then(|| view! { <div class="brand-glow"></div> })}
                                    <span class="brand-name">{brand.name}</span>
                                    <div class="brand-hover-border"></div>
                                    {brand.featured.then(|| view! { <div class="brand-badge">"Featured"</div> })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class=reveal_class("brand-spotlight", shown)>
                    <div class="corner corner-top"></div>
                    <div class="corner corner-bottom"></div>
                    <div class="brand-spotlight-body">
                        <div>
                            <div class="brand-spotlight-mark gradient-gold breathe">"AGL"</div>
                            <p class="muted">
                                "As an authorized dealer of AGL Tiles, we bring you the finest collection of "
                                "premium vitrified tiles, floor tiles, and wall tiles with cutting-edge designs "
                                "and unmatched quality."
                            </p>
                        </div>
                        <a href="#products" class="btn btn-gold">"View AGL Collection"</a>
                    </div>
                </div>
            </div>

            <div class=reveal_class("brand-belt", shown)>
                <div class="brand-belt-track">{belt}</div>
            </div>
        </section>
    }
}
