//! Catalog domain types and logic for the TeaHub storefront.
//!
//! This crate holds everything the landing page knows about what it sells:
//!
//! - **Catalog**: teas, categories, size options and per-product size selection
//! - **Reviews**: customer testimonials and their display formatting
//! - **Search**: category + text filtering over the static catalog
//! - **Contact**: WhatsApp, mail-to and phone deep links
//! - **Schema**: schema.org JSON-LD documents for search engines
//!
//! # Example
//!
//! ```rust
//! use teahub_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let query = CatalogQuery::new()
//!     .with_category(CategoryFilter::Only(Category::Herbal))
//!     .with_search("calm");
//!
//! let results = query.run(&catalog);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results.products()[0].name, "Chamomile Bliss");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod contact;
pub mod reviews;
pub mod schema;
pub mod search;

pub use error::CatalogError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, SizeOption, SizeSelections};

    // Reviews
    pub use crate::reviews::{Review, ReviewStats};

    // Search
    pub use crate::search::{CatalogQuery, CategoryFilter, SearchResults};

    // Contact
    pub use crate::contact::{mailto_link, tel_link, WhatsAppLink};
}
