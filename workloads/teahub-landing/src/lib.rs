//! TeaHub landing page.
//!
//! A single client-side rendered page:
//! - Navbar with anchor navigation and a mobile menu
//! - Hero banner with scroll parallax
//! - About section, image strip, filterable tea catalog
//! - Testimonial carousel with JSON-LD review metadata
//! - Footer with contact links and the newsletter form
//! - Scroll progress bar and a floating WhatsApp button
//!
//! Site settings come from `site.toml`, embedded at build time.

pub mod app;
mod browser;
mod content;
mod sections;

use std::sync::Arc;

use anyhow::{Context, Result};
use teahub_commerce::prelude::*;
use teahub_commerce::reviews::{builtin_reviews, validate_reviews};
use teahub_core::SiteConfig;

const SITE_TOML: &str = include_str!("../site.toml");

/// Everything the page renders from, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
    pub reviews: Vec<Review>,
}

impl Site {
    /// Advertised review figures for the stats strip and metadata.
    pub fn review_stats(&self) -> ReviewStats {
        ReviewStats {
            average_rating: self.config.reviews.average_rating,
            review_count: self.config.reviews.review_count,
        }
    }
}

/// Shared handle provided as context to every section.
pub type SharedSite = Arc<Site>;

fn parse_config(source: &str) -> Result<SiteConfig> {
    SiteConfig::from_toml_str(source).context("Failed to load site.toml")
}

fn check_content(catalog: &Catalog, reviews: &[Review]) -> Result<()> {
    catalog.validate().context("Built-in catalog is invalid")?;
    validate_reviews(reviews).context("Built-in reviews are invalid")?;
    Ok(())
}

fn init_logging(config: &SiteConfig) {
    let level = config
        .logging
        .level_filter()
        .and_then(|filter| filter.to_level());
    if let Some(level) = level {
        // Fails only if a logger is already installed.
        let _ = console_log::init_with_level(level);
    }
}

/// Load configuration and content, install the console logger.
///
/// Never fails: a bad config falls back to the defaults and is reported on
/// the console.
pub fn boot() -> Site {
    let parsed = parse_config(SITE_TOML);
    let config = parsed.as_ref().cloned().unwrap_or_default();
    init_logging(&config);

    if let Err(e) = parsed {
        log::error!("{:#}; using default site settings", e);
    }

    let catalog = Catalog::builtin();
    let reviews = builtin_reviews();
    if let Err(e) = check_content(&catalog, &reviews) {
        log::error!("{:#}", e);
    }

    log::info!(
        "{} landing page: {} teas, {} reviews",
        config.brand.name,
        catalog.len(),
        reviews.len()
    );

    Site {
        config,
        catalog,
        reviews,
    }
}
