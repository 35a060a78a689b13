//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use teahub_core::prelude::*;
//! ```

pub use crate::nav::{MobileMenu, NavLink};
pub use crate::scroll::{scroll_progress, ParallaxOffsets, ScrollThreshold};
pub use crate::{
    Carousel, ContactPrompt, CoreError, NewsletterForm, PromptAction, SiteConfig, SubmitOutcome,
    SubscribeStatus, Toast, VisibilityLatch,
};
