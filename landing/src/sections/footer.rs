use leptos::prelude::*;

use super::site_config;
use crate::content::FOOTER_LINKS;
use crate::hooks::{reveal_class, scroll_to_top, use_reveal};

#[component]
pub fn Footer() -> impl IntoView {
    let config = site_config();
    let business = config.business;
    let social = config.social;

    let footer = NodeRef::<leptos::html::Footer>::new();
    let shown = use_reveal(footer, config.reveal.card);

    let socials = [
        ("Instagram", "◎", social.instagram),
        ("Facebook", "f", social.facebook),
        ("WhatsApp", "✆", social.whatsapp),
    ];
    let copyright = format!(
        "© {} {} {}. All rights reserved.",
        business.established, business.name, business.tagline
    );

    view! {
        <footer class="footer" node_ref=footer>
            <div class=reveal_class("footer-stripes", shown)></div>

            <div class="container">
                <div class="footer-grid">
                    <div class=reveal_class("footer-column", shown)>
                        <h3 class="footer-title">{business.name.clone()}</h3>
                        <p class="footer-tagline">{business.tagline.clone()}</p>
                        <p class="footer-motto">{format!("\"{}\"", business.motto)}</p>
                        <a href=business.phone_uri.clone() class="footer-phone">
                            <span class="icon">"☎"</span>
                            <span>{business.phone_display.clone()}</span>
                        </a>
                    </div>

                    <div class=reveal_class("footer-column", shown) style="--stagger: 100ms">
                        <h4 class="footer-heading">"Quick Links"</h4>
                        <ul class="footer-links">
                            {FOOTER_LINKS
                                .iter()
                                .enumerate()
                                .map(|(i, link)| {
                                    let delay = format!("--stagger: {}ms", 200 + i * 50);
                                    view! {
                                        <li style=delay>
                                            <a href=link.href class="footer-link">
                                                <span class="footer-link-rule"></span>
                                                {link.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div class=reveal_class("footer-column", shown) style="--stagger: 200ms">
                        <h4 class="footer-heading">"Connect With Us"</h4>
                        <div class="footer-social">
                            {socials
                                .into_iter()
                                .map(|(label, glyph, href)| view! {
                                    <a href=href class="footer-social-link" aria-label=label target="_blank">
                                        {glyph}
                                    </a>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>

                <div class=reveal_class("footer-divider", shown)></div>

                <div class="footer-bottom">
                    <p class=reveal_class("footer-copyright", shown)>{copyright}</p>
                    <button class=reveal_class("footer-top", shown) on:click=move |_| scroll_to_top()>
                        <span>"Back to Top"</span>
                        <span class="arrow">"↑"</span>
                    </button>
                </div>
            </div>
        </footer>
    }
}
