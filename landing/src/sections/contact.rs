use curv_motion::RevealOptions;
use leptos::prelude::*;

use super::site_config;
use crate::content::{ContactCard, contact_cards};
use crate::hooks::{reveal_class, use_reveal, use_typewriter};

#[component]
pub fn Contact() -> impl IntoView {
    let config = site_config();
    let business = config.business;

    let section = NodeRef::<leptos::html::Section>::new();
    let phone = NodeRef::<leptos::html::Div>::new();
    let shown = use_reveal(section, config.reveal.section);
    let phone_shown = use_reveal(phone, RevealOptions::IMMEDIATE);
    let digits = use_typewriter(config.typewriter.typewriter(&business.phone_display), phone_shown);

    let cards = contact_cards(&business.phone_display, &business.phone_uri, &business.hours);

    view! {
        <section id="contact" class="contact section-snap" node_ref=section>
            <div class="contact-texture"></div>

            <div class="container">
                <div class=reveal_class("section-head", shown)>
                    <span class="eyebrow primary">"Get in Touch"</span>
                    <h2 class="section-title">
                        "Let's Create " <span class="gradient-primary">"Together"</span>
                    </h2>
                    <p class="section-lead">
                        "Ready to transform your space? Contact us for expert guidance and access to our "
                        "premium tile collection."
                    </p>
                </div>

                <div class=reveal_class("contact-phone", shown) node_ref=phone>
                    <a href=business.phone_uri.clone() class="contact-phone-link">
                        <div class="contact-phone-box glow">
                            <p class="contact-phone-label">"Call Now"</p>
                            <p class="contact-phone-number">{move || digits.get()}</p>
                            <div class="contact-phone-cta">
                                <span>"Tap to Call"</span>
                                <span class="arrow">"→"</span>
                            </div>
                        </div>
                    </a>
                </div>

                <div class=reveal_class("contact-grid", shown)>
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| view! { <ContactTile card=card index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactTile(card: ContactCard, index: usize) -> impl IntoView {
    let stagger = format!("--stagger: {}ms", 400 + index * 100);
    let body = view! {
        <span class="contact-card-icon">{card.icon.glyph()}</span>
        <p class="contact-card-label">{card.label}</p>
        <p class="contact-card-value">{card.value}</p>
    };

    match card.href {
        Some(href) => view! {
            <a href=href class="contact-card link" style=stagger>{body}</a>
        }
        .into_any(),
        None => view! {
            <div class="contact-card" style=stagger>{body}</div>
        }
        .into_any(),
    }
}
