//! Site configuration.
//!
//! Contact details, outbound links and animation timing live in
//! `landing/site.toml`, which is embedded at compile time. Every field has a
//! default matching the published site, so the file only needs to list what
//! it changes.

use std::time::Duration;

use curv_motion::tween::{CountUp, Typewriter};
use curv_motion::{AutoplayConfig, RevealOptions};
use serde::Deserialize;
use thiserror::Error;

/// Embedded `site.toml`.
const SITE_TOML: &str = include_str!("../site.toml");

/// Problems with a `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Not valid TOML, or a field has the wrong type.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Parsed, but a value makes no sense.
    #[error("invalid site config: {field} {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub business: BusinessConfig,
    pub social: SocialConfig,
    /// Testimonial autoplay timing
    pub carousel: AutoplayConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub typewriter: TypewriterConfig,
}

/// Name, contact details and location of the showroom.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    pub name: String,
    pub tagline: String,
    pub motto: String,
    /// Phone number as printed, e.g. `963 796 9705`
    pub phone_display: String,
    /// `tel:` URI the phone links point at
    pub phone_uri: String,
    pub address: String,
    pub map_url: String,
    pub hours: String,
    pub established: u16,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "CURV".into(),
            tagline: "Tiles & Artificial".into(),
            motto: "Tiles that Inspire, Spaces that Breathe".into(),
            phone_display: "963 796 9705".into(),
            phone_uri: "tel:9637969705".into(),
            address: "Near Ankali Phata, Sangli - Kolhapur Road, Sangli - 416 416".into(),
            map_url: "https://www.google.com/maps?q=Opp.+Indian+Oil+Petrol+Pump,+Near+Ankali+Phata,+Sangli+-+Kolhapur+Road,+Sangli+-+416+416".into(),
            hours: "Mon - Sat: 9AM - 8PM".into(),
            established: 2023,
        }
    }
}

/// Social profile links shown in the footer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub instagram: String,
    pub facebook: String,
    pub whatsapp: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            instagram: "https://www.instagram.com/c_curv_v?igsh=MXI4YnhidXVvM3JjNw%3D%3D&utm_source=qr".into(),
            facebook: "#".into(),
            whatsapp: "https://wa.me/919637969705".into(),
        }
    }
}

/// Observer margins for reveal-on-scroll blocks.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Section headers and whole sections
    pub section: RevealOptions,
    /// Product cards and the footer
    pub card: RevealOptions,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section: RevealOptions::SECTION,
            card: RevealOptions::CARD,
        }
    }
}

/// "Serving since" year counter.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub from: i64,
    pub to: i64,
    pub duration_ms: u64,
}

impl CounterConfig {
    pub fn count_up(&self) -> CountUp {
        CountUp::new(self.from, self.to, Duration::from_millis(self.duration_ms))
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            from: 2020,
            to: 2023,
            duration_ms: 2000,
        }
    }
}

/// Phone number reveal in the contact block.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub step_ms: u64,
}

impl TypewriterConfig {
    pub fn typewriter(&self, target: &str) -> Typewriter {
        Typewriter::new(target, Duration::from_millis(self.step_ms))
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            step_ms: Typewriter::DEFAULT_STEP.as_millis() as u64,
        }
    }
}

impl SiteConfig {
    /// Load the embedded `site.toml`.
    /// Returns default config if the file is invalid.
    pub fn load() -> Self {
        Self::load_from_str(SITE_TOML)
    }

    /// Parse `content`, falling back to defaults with a warning.
    pub fn load_from_str(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using built-in defaults");
                Self::default()
            }
        }
    }

    /// Strict parse with validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.business.phone_uri.starts_with("tel:") {
            return Err(ConfigError::Invalid {
                field: "business.phone_uri",
                reason: "must be a tel: URI",
            });
        }
        if self.business.phone_display.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "business.phone_display",
                reason: "must not be empty",
            });
        }
        if self.carousel.interval_ms > AutoplayConfig::MAX_INTERVAL_MS {
            return Err(ConfigError::Invalid {
                field: "carousel.interval_ms",
                reason: "must fit a browser timer (at most i32::MAX ms)",
            });
        }
        let typewriter = self.typewriter.typewriter(&self.business.phone_display);
        let last_frame = typewriter.due_at(typewriter.frame_count().saturating_sub(1));
        if last_frame.as_millis() > u128::from(AutoplayConfig::MAX_INTERVAL_MS) {
            return Err(ConfigError::Invalid {
                field: "typewriter.step_ms",
                reason: "puts the last phone digit past the browser timer limit",
            });
        }
        if self.counter.to < self.counter.from {
            return Err(ConfigError::Invalid {
                field: "counter.to",
                reason: "must not be before counter.from",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curv_motion::ManualNavigation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::from_toml_str(SITE_TOML).expect("embedded site.toml parses");
        assert_eq!(config.business.phone_uri, "tel:9637969705");
        assert_eq!(config.carousel.interval(), Duration::from_millis(6000));
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.business.name, "CURV");
        assert_eq!(config.business.established, 2023);
        assert_eq!(config.carousel, AutoplayConfig::default());
        assert_eq!(config.reveal.section.root_margin(), "-100px");
        assert_eq!(config.reveal.card.root_margin(), "-50px");
        assert_eq!(config.counter.count_up().to, 2023);
        assert_eq!(config.typewriter.step_ms, 100);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = SiteConfig::from_toml_str("").expect("empty parses");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[carousel]
interval_ms = 8000
manual_navigation = "restart"

[business]
hours = "Mon - Sun: 10AM - 6PM"
"#,
        )
        .expect("valid config");

        assert_eq!(config.carousel.interval(), Duration::from_millis(8000));
        assert_eq!(config.carousel.manual_navigation, ManualNavigation::Restart);
        assert_eq!(config.business.hours, "Mon - Sun: 10AM - 6PM");
        assert_eq!(config.business.phone_display, "963 796 9705");
        assert_eq!(config.social, SocialConfig::default());
    }

    #[test]
    fn test_rejects_non_tel_phone_uri() {
        let err =
            SiteConfig::from_toml_str("[business]\nphone_uri = \"9637969705\"\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "business.phone_uri",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_backwards_counter() {
        let err = SiteConfig::from_toml_str("[counter]\nfrom = 2023\nto = 2020\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "counter.to", .. }));
    }

    #[test]
    fn test_rejects_interval_beyond_browser_timer() {
        let err = SiteConfig::from_toml_str("[carousel]\ninterval_ms = 3000000000\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "carousel.interval_ms",
                ..
            }
        ));

        let config = SiteConfig::from_toml_str("[carousel]\ninterval_ms = 2147483647\n")
            .expect("largest browser delay is accepted");
        assert_eq!(config.carousel.interval().as_millis(), i32::MAX as u128);
    }

    #[test]
    fn test_rejects_typewriter_step_beyond_browser_timer() {
        let err = SiteConfig::from_toml_str("[typewriter]\nstep_ms = 300000000\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "typewriter.step_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_timers_fall_back_to_default() {
        let config = SiteConfig::load_from_str(
            "[carousel]\ninterval_ms = 3000000000\n[typewriter]\nstep_ms = 300000000\n",
        );
        assert_eq!(config, SiteConfig::default());

        let typewriter = config.typewriter.typewriter(&config.business.phone_display);
        let last = typewriter.due_at(typewriter.frame_count() - 1);
        assert!(i32::try_from(last.as_millis()).is_ok());
        assert!(i32::try_from(config.carousel.interval().as_millis()).is_ok());
    }

    #[test]
    fn test_malformed_config_falls_back_to_default() {
        let config = SiteConfig::load_from_str("[carousel\ninterval_ms = ");
        assert_eq!(config, SiteConfig::default());

        let config = SiteConfig::load_from_str("[carousel]\ninterval_ms = \"soon\"\n");
        assert_eq!(config, SiteConfig::default());
    }
}
