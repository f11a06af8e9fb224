// Page sections, top to bottom

mod about;
mod brands;
mod contact;
mod footer;
mod hero;
mod nav;
mod products;
mod testimonials;

pub use about::About;
pub use brands::Brands;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use products::ProductCategories;
pub use testimonials::Testimonials;

use leptos::prelude::*;

use crate::config::SiteConfig;

/// Site config provided by `App`, or the built-in defaults outside of it.
pub(crate) fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
