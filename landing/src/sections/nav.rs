use leptos::prelude::*;

use super::site_config;
use crate::content::MENU_ITEMS;

#[component]
pub fn Nav() -> impl IntoView {
    let config = site_config();
    let business = config.business;
    let (menu_open, set_menu_open) = signal(false);

    let phone_uri = business.phone_uri.clone();
    let phone_display = business.phone_display.clone();

    view! {
        <header class="nav">
            <div class="nav-inner">
                <a href="#hero" class="nav-brand">
                    <span class="nav-title">{business.name.clone()}</span>
                    <span class="nav-tagline">{business.tagline.clone()}</span>
                </a>
                <div class="nav-actions">
                    <a href=business.phone_uri.clone() class="nav-phone">
                        <span class="icon">"☎"</span>
                        <span>{business.phone_display.clone()}</span>
                    </a>
                    <button
                        class=move || if menu_open.get() { "nav-toggle open" } else { "nav-toggle" }
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </header>

        // Fullscreen menu overlay
        <Show when=move || menu_open.get()>
            <div class="nav-overlay">
                <div class="grain"></div>
                <div class="nav-overlay-inner">
                    <nav class="nav-menu">
                        {MENU_ITEMS
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                let delay = format!("animation-delay: {}ms", 300 + i * 100);
                                view! {
                                    <a
                                        href=item.href
                                        class="nav-menu-item"
                                        style=delay
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        <span class="nav-menu-index">{format!("0{}", i + 1)}</span>
                                        <span class="nav-menu-label">{item.name}</span>
                                        <span class="nav-menu-rule"></span>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>
                    <div class="nav-menu-contact">
                        <a href=phone_uri.clone() class="nav-menu-phone">
                            <span class="icon">"☎"</span>
                            <span>{phone_display.clone()}</span>
                        </a>
                    </div>
                </div>
            </div>
        </Show>
    }
}
