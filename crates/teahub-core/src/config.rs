//! Site configuration.
//!
//! Every section and field has a default, so an empty document yields the
//! stock TeaHub site.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Top-level site configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub contact: ContactConfig,
    pub timing: TimingConfig,
    pub scroll: ScrollConfig,
    pub visibility: VisibilityConfig,
    pub reviews: ReviewsConfig,
    pub logging: LoggingConfig,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.brand.name.trim().is_empty() {
            return Err(CoreError::invalid("brand.name", "must not be empty"));
        }

        let number = &self.contact.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::invalid(
                "contact.whatsapp_number",
                format!("{:?} must be digits only, country code first", number),
            ));
        }

        for (field, value) in self.timing.durations() {
            if value == 0 {
                return Err(CoreError::invalid(field, "must be greater than zero"));
            }
        }

        for (field, value) in [
            ("scroll.navbar_threshold", self.scroll.navbar_threshold),
            ("scroll.contact_threshold", self.scroll.contact_threshold),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(CoreError::invalid(field, format!("{} must not be negative", value)));
            }
        }

        for (field, value) in [
            ("visibility.about", self.visibility.about),
            ("visibility.products", self.visibility.products),
            ("visibility.reviews", self.visibility.reviews),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoreError::invalid(field, format!("{} is outside 0..=1", value)));
            }
        }

        if !(0.0..=5.0).contains(&self.reviews.average_rating) {
            return Err(CoreError::invalid(
                "reviews.average_rating",
                format!("{} is outside 0..=5", self.reviews.average_rating),
            ));
        }

        if self.logging.level_filter().is_none() {
            return Err(CoreError::invalid(
                "logging.level",
                format!("unknown level {:?}", self.logging.level),
            ));
        }

        Ok(())
    }
}

/// Brand identity and page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Brand name used in copy and prefilled messages.
    pub name: String,
    /// Canonical site URL (breadcrumb metadata).
    pub site_url: String,
    /// Product name used in the review metadata.
    pub collection_name: String,
    /// Page title.
    pub title: String,
    /// Meta description.
    pub description: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "TeaHub".to_string(),
            site_url: "https://teahub.com".to_string(),
            collection_name: "TeaHub Premium Tea Collection".to_string(),
            title: "TeaHub | The Art of Leaf & Luxury".to_string(),
            description: "Single-origin, small-batch Indian teas. Order Assam, Darjeeling, \
                          masala chai and herbal blends on WhatsApp."
                .to_string(),
        }
    }
}

/// A social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Network name (e.g., "Instagram").
    pub name: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// WhatsApp number, digits only with country code (e.g., "918754148249").
    pub whatsapp_number: String,
    pub email: String,
    /// Phone number as displayed.
    pub phone: String,
    pub address: String,
    pub socials: Vec<SocialLink>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "918754148249".to_string(),
            email: "hello@teahub.com".to_string(),
            phone: "+91 87541 48249".to_string(),
            address: "Mumbai, Maharashtra, India".to_string(),
            socials: vec![
                SocialLink::new("Instagram", "https://instagram.com/teahub"),
                SocialLink::new("Facebook", "https://facebook.com/teahub"),
                SocialLink::new("Twitter", "https://twitter.com/teahub"),
            ],
        }
    }
}

/// Timer durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Carousel auto-advance interval.
    pub carousel_interval_ms: u32,
    /// Pause after a manual carousel interaction.
    pub carousel_resume_ms: u32,
    /// Delay before the contact tooltip appears.
    pub tooltip_delay_ms: u32,
    /// How long the contact tooltip stays up.
    pub tooltip_visible_ms: u32,
    /// Simulated newsletter round trip.
    pub subscribe_delay_ms: u32,
    /// Toast lifetime.
    pub toast_ms: u32,
}

impl TimingConfig {
    fn durations(&self) -> [(&'static str, u32); 6] {
        [
            ("timing.carousel_interval_ms", self.carousel_interval_ms),
            ("timing.carousel_resume_ms", self.carousel_resume_ms),
            ("timing.tooltip_delay_ms", self.tooltip_delay_ms),
            ("timing.tooltip_visible_ms", self.tooltip_visible_ms),
            ("timing.subscribe_delay_ms", self.subscribe_delay_ms),
            ("timing.toast_ms", self.toast_ms),
        ]
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: 5_000,
            carousel_resume_ms: 10_000,
            tooltip_delay_ms: 2_000,
            tooltip_visible_ms: 5_000,
            subscribe_delay_ms: 1_000,
            toast_ms: 5_000,
        }
    }
}

/// Scroll offsets, in CSS pixels, past which UI changes state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Navbar gets a solid background past this offset.
    pub navbar_threshold: f64,
    /// Floating contact button appears past this offset.
    pub contact_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 50.0,
            contact_threshold: 400.0,
        }
    }
}

/// Intersection ratios at which sections fade in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub about: f64,
    pub products: f64,
    pub reviews: f64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            about: 0.2,
            products: 0.1,
            reviews: 0.2,
        }
    }
}

/// Advertised review figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    pub average_rating: f32,
    pub review_count: u32,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            average_rating: 4.9,
            review_count: 500,
        }
    }
}

/// Browser console logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of off, error, warn, info, debug, trace.
    pub level: String,
}

impl LoggingConfig {
    /// Parsed level, `None` if unrecognised.
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.level.parse().ok()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.brand.name, "TeaHub");
        assert_eq!(config.timing.carousel_interval_ms, 5_000);
        assert_eq!(config.timing.carousel_resume_ms, 10_000);
        assert_eq!(config.scroll.navbar_threshold, 50.0);
        assert_eq!(config.contact.socials.len(), 3);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [timing]
            carousel_interval_ms = 3000

            [contact]
            whatsapp_number = "911234567890"
            "#,
        )
        .unwrap();

        assert_eq!(config.timing.carousel_interval_ms, 3_000);
        assert_eq!(config.timing.carousel_resume_ms, 10_000);
        assert_eq!(config.contact.whatsapp_number, "911234567890");
        assert_eq!(config.contact.email, "hello@teahub.com");
    }

    #[test]
    fn test_socials_from_array_of_tables() {
        let config = SiteConfig::from_toml_str(
            r#"
            [[contact.socials]]
            name = "Instagram"
            url = "https://instagram.com/example"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.contact.socials,
            vec![SocialLink::new("Instagram", "https://instagram.com/example")]
        );
    }

    #[test]
    fn test_rejects_non_digit_whatsapp_number() {
        let err = SiteConfig::from_toml_str("[contact]\nwhatsapp_number = \"+91 XXXXX\"").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidConfig {
                field: "contact.whatsapp_number",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = SiteConfig::from_toml_str("[timing]\ntoast_ms = 0").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { field: "timing.toast_ms", .. }));
    }

    #[test]
    fn test_rejects_visibility_ratio_out_of_range() {
        let err = SiteConfig::from_toml_str("[visibility]\nreviews = 1.5").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { field: "visibility.reviews", .. }));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let err = SiteConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { field: "logging.level", .. }));
    }

    #[test]
    fn test_rejects_empty_brand() {
        let err = SiteConfig::from_toml_str("[brand]\nname = \"  \"").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { field: "brand.name", .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let err = SiteConfig::from_toml_str("[timing\n").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }

    #[test]
    fn test_wrong_type() {
        let err = SiteConfig::from_toml_str("[timing]\ntoast_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }

    #[test]
    fn test_log_level_filter() {
        let config = SiteConfig::from_toml_str("[logging]\nlevel = \"debug\"").unwrap();
        assert_eq!(config.logging.level_filter(), Some(log::LevelFilter::Debug));
    }
}
