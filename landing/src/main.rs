// CURV Tiles & Artificial landing page, Leptos 0.8 CSR

mod config;
mod content;
mod hooks;
mod sections;
mod styles;

use leptos::prelude::*;
use sections::*;

use crate::config::SiteConfig;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::load();
    tracing::info!(
        business = %config.business.name,
        interval_ms = config.carousel.interval_ms,
        "mounting landing page"
    );
    provide_context(config);

    view! {
        <style>{styles::motion_vars()}{styles::SITE_CSS}</style>
        <div class="grain"></div>
        <Nav />
        <main>
            <Hero />
            <ProductCategories />
            <About />
            <Brands />
            <Testimonials />
            <Contact />
        </main>
        <Footer />
    }
}
