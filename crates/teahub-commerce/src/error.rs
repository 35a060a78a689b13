//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while validating or interacting with the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Size index outside the product's size list.
    #[error("Size index {index} out of range for {product_id} ({available} sizes)")]
    SizeOutOfRange {
        product_id: String,
        index: usize,
        available: usize,
    },

    /// Product defined without any size option.
    #[error("Product {0} has no sizes")]
    NoSizes(String),

    /// Product rating outside 0-5.
    #[error("Invalid rating {rating} for product {product_id}")]
    InvalidProductRating { product_id: String, rating: f32 },

    /// Review rating outside 1-5.
    #[error("Invalid rating {rating} for review {review_id}")]
    InvalidReviewRating { review_id: String, rating: u8 },

    /// Review date is not an ISO calendar date.
    #[error("Invalid date {date:?} for review {review_id}")]
    InvalidReviewDate { review_id: String, date: String },

    /// Two entries share an identifier.
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
