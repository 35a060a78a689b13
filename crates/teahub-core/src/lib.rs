//! TeaHub landing page core.
//!
//! Framework-free state for every interactive piece of the page. The Leptos
//! workload owns signals, timers and DOM observers; the decisions they drive
//! live here so they can be tested without a browser.
//!
//! # Architecture
//!
//! - [`SiteConfig`]: brand, contact details, timings and thresholds loaded
//!   from TOML
//! - [`Carousel`]: testimonial slide index with auto-advance and a resume
//!   cooldown
//! - [`scroll`]: scroll percentage, threshold checks and parallax offsets
//! - [`VisibilityLatch`]: one-way "has been seen" flag
//! - [`ContactPrompt`]: floating contact button and its delayed tooltip
//! - [`NewsletterForm`]: the subscribe form
//! - [`nav`]: navigation links and the mobile menu
//!
//! # Quick Start
//!
//! ```rust
//! use teahub_core::prelude::*;
//!
//! let config = SiteConfig::from_toml_str("[brand]\nname = \"TeaHub\"").unwrap();
//! let mut carousel = Carousel::new(5, config.timing.carousel_resume_ms);
//!
//! carousel.previous(0);
//! assert_eq!(carousel.index(), 4);
//! assert!(!carousel.is_auto_advancing());
//! ```

pub mod prelude;

mod carousel;
mod config;
mod error;
mod latch;
mod newsletter;
mod prompt;

pub mod nav;
pub mod scroll;

pub use carousel::*;
pub use config::*;
pub use error::*;
pub use latch::*;
pub use newsletter::*;
pub use prompt::*;
