use leptos::prelude::*;

use super::site_config;
use crate::content::{CATEGORIES, Category};
use crate::hooks::{reveal_class, use_reveal};

#[component]
pub fn ProductCategories() -> impl IntoView {
    let reveal = site_config().reveal;
    let header = NodeRef::<leptos::html::Div>::new();
    let grid = NodeRef::<leptos::html::Div>::new();
    let header_shown = use_reveal(header, reveal.section);
    let grid_shown = use_reveal(grid, reveal.card);

    view! {
        <section id="products" class="products">
            <div class="container">
                <div class=reveal_class("section-head", header_shown) node_ref=header>
                    <span class="eyebrow primary">"Our Collection"</span>
                    <h2 class="section-title">
                        "Product " <span class="gradient-primary">"Categories"</span>
                    </h2>
                    <p class="section-lead">
                        "Discover our premium selection of tiles and surfaces crafted for modern living"
                    </p>
                </div>

                <div class=reveal_class("product-grid", grid_shown) node_ref=grid>
                    {CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| view! { <ProductCard category=*category index=index /> })
                        .collect::<Vec<_>>()}
                </div>

                <div class=reveal_class("products-cta", grid_shown)>
                    <a href="#contact" class="btn btn-luxury">"Request Catalog"</a>
                </div>
            </div>
            <div class=reveal_class("section-rule", grid_shown)></div>
        </section>
    }
}

#[component]
fn ProductCard(category: Category, index: usize) -> impl IntoView {
    let card = NodeRef::<leptos::html::Article>::new();
    let shown = use_reveal(card, site_config().reveal.card);
    let accent = category.accent.class();
    let stagger = format!("--stagger: {}ms", index * 150);

    view! {
        <article
            class=move || format!("product-card {accent}{}", if shown.get() { " revealed" } else { "" })
            style=stagger
            node_ref=card
        >
            <div class="product-card-inner">
                <div class="product-card-media">
                    <img src=category.image alt=category.title />
                    <div class="product-card-shade"></div>
                </div>
                <div class="product-card-body">
                    <span class="product-card-number">{format!("0{}", category.id)}</span>
                    <h3 class="product-card-title">{category.title}</h3>
                    <p class="product-card-description">{category.description}</p>
                    <div class="product-card-cta">
                        <span>"View Collection"</span>
                        <span class="arrow">"→"</span>
                    </div>
                </div>
                <div class="product-card-border"></div>
            </div>
        </article>
    }
}
