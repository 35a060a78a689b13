//! Search module.
//!
//! Category and free-text filtering over the catalog.

mod filter;
mod query;
mod results;

pub use filter::CategoryFilter;
pub use query::CatalogQuery;
pub use results::SearchResults;
