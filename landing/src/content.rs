// Static page copy
//
// Everything here is fixed at compile time; sections render it as-is.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const MENU_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "#hero" },
    NavItem { name: "Products", href: "#products" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Brands", href: "#brands" },
    NavItem { name: "Testimonials", href: "#testimonials" },
    NavItem { name: "Contact", href: "#contact" },
];

pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { name: "Home", href: "#hero" },
    NavItem { name: "Products", href: "#products" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Brands", href: "#brands" },
    NavItem { name: "Contact", href: "#contact" },
];

pub const HEADLINE_WORDS: &[&str] = &["Tiles", "that", "Inspire,"];
pub const TAGLINE_WORDS: &[&str] = &["Spaces", "that", "Breathe"];

/// Accent colour family of a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Gold,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Gold => "accent-gold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub accent: Accent,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: 1,
        title: "Vitrified Tiles",
        description: "Premium low-porosity ceramic tiles with exceptional durability and elegant finish",
        image: "assets/vitrified-tiles.jpg",
        accent: Accent::Primary,
    },
    Category {
        id: 2,
        title: "Floor Tiles",
        description: "Transform your spaces with our curated collection of luxury floor tiles",
        image: "assets/floor-tiles.jpg",
        accent: Accent::Gold,
    },
    Category {
        id: 3,
        title: "Wall Tiles",
        description: "Sophisticated wall coverings that elevate any interior design",
        image: "assets/wall-tiles.jpg",
        accent: Accent::Primary,
    },
    Category {
        id: 4,
        title: "Artificial Granite",
        description: "Premium engineered stone surfaces with natural beauty and superior strength",
        image: "assets/artificial-granite.jpg",
        accent: Accent::Gold,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "500+", label: "Premium Designs" },
    Stat { value: "50+", label: "Brand Partners" },
    Stat { value: "1000+", label: "Happy Clients" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub featured: bool,
}

pub const BRANDS: &[Brand] = &[
    Brand { name: "AGL", featured: true },
    Brand { name: "Somany", featured: false },
    Brand { name: "Kajaria", featured: false },
    Brand { name: "RAK", featured: false },
    Brand { name: "Orient Bell", featured: false },
    Brand { name: "Nitco", featured: false },
];

/// Copies of the brand list in the sliding belt, so it never runs dry mid-loop.
pub const BRAND_BELT_REPEATS: usize = 3;

/// A client quote shown in the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Number of stars to draw
    pub rating: u8,
}

impl Testimonial {
    /// First letter of the name, for the avatar bubble.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Rajesh Sharma",
        role: "Interior Designer",
        content: "CURV Tiles transformed our client's villa with their exceptional collection. The quality and finish of their vitrified tiles are simply unmatched in the market.",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Priya Patel",
        role: "Homeowner",
        content: "From selection to installation guidance, the team at CURV was incredibly helpful. Our new floor tiles have completely elevated our living space.",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Amit Desai",
        role: "Architect",
        content: "As an architect, I appreciate their vast range of designs and the expertise they bring. The AGL collection they offer is perfect for luxury projects.",
        rating: 5,
    },
    Testimonial {
        id: 4,
        name: "Meera Joshi",
        role: "Business Owner",
        content: "Renovating our office space was a breeze with CURV. Their artificial granite selection gave us the premium look we wanted at a reasonable price.",
        rating: 5,
    },
];

/// Glyph drawn on a contact card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    Phone,
    MapPin,
    Clock,
}

impl ContactIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ContactIcon::Phone => "☎",
            ContactIcon::MapPin => "⌖",
            ContactIcon::Clock => "◷",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub icon: ContactIcon,
    pub label: &'static str,
    pub value: String,
    /// Cards without a link render as a static block
    pub href: Option<String>,
}

/// Contact cards, filled from the site config.
pub fn contact_cards(phone_display: &str, phone_uri: &str, hours: &str) -> Vec<ContactCard> {
    vec![
        ContactCard {
            icon: ContactIcon::Phone,
            label: "Call Us",
            value: phone_display.to_string(),
            href: Some(phone_uri.to_string()),
        },
        ContactCard {
            icon: ContactIcon::MapPin,
            label: "Visit Us",
            value: "Premium Tile Showroom".to_string(),
            href: Some("#".to_string()),
        },
        ContactCard {
            icon: ContactIcon::Clock,
            label: "Working Hours",
            value: hours.to_string(),
            href: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SECTION_IDS: &[&str] = &[
        "hero",
        "products",
        "about",
        "brands",
        "testimonials",
        "contact",
    ];

    #[test]
    fn testimonials_are_non_empty_with_unique_ids() {
        assert!(!TESTIMONIALS.is_empty());
        let ids: HashSet<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TESTIMONIALS.len());
    }

    #[test]
    fn ratings_are_one_to_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn testimonial_initial() {
        assert_eq!(TESTIMONIALS[0].initial(), 'R');
    }

    #[test]
    fn anchors_point_at_real_sections() {
        for item in MENU_ITEMS.iter().chain(FOOTER_LINKS) {
            let id = item.href.trim_start_matches('#');
            assert!(SECTION_IDS.contains(&id), "{} has no section", item.href);
        }
    }

    #[test]
    fn exactly_one_featured_brand() {
        assert_eq!(BRANDS.iter().filter(|b| b.featured).count(), 1);
    }

    #[test]
    fn hours_card_has_no_link() {
        let cards = contact_cards("963 796 9705", "tel:9637969705", "Mon - Sat: 9AM - 8PM");
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].href.as_deref(), Some("tel:9637969705"));
        assert!(cards[2].href.is_none());
    }
}
