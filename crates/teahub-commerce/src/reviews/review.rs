//! Review type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::ReviewId;

/// Number of stars in a rating row.
pub const MAX_STARS: u8 = 5;

const ISO_DATE: &str = "%Y-%m-%d";

/// A customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: ReviewId,
    /// Author display name.
    pub name: String,
    /// Author city or state.
    pub location: String,
    /// Initials shown in the avatar circle.
    pub avatar: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Publication date as `YYYY-MM-DD`.
    pub date: String,
    /// Review body.
    pub text: String,
    /// Product label the review refers to.
    pub product: String,
}

impl Review {
    /// Parsed publication date.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, ISO_DATE).ok()
    }

    /// Long-form date, e.g. "20 November 2025".
    ///
    /// Falls back to the raw string if it does not parse.
    pub fn formatted_date(&self) -> String {
        self.published_on()
            .map(|d| d.format("%-d %B %Y").to_string())
            .unwrap_or_else(|| self.date.clone())
    }

    /// Whether star `position` (0-based) is filled.
    pub fn is_star_filled(&self, position: u8) -> bool {
        position < self.rating
    }

    /// Check the invariants of a review.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !(1..=MAX_STARS).contains(&self.rating) {
            return Err(CatalogError::InvalidReviewRating {
                review_id: self.id.to_string(),
                rating: self.rating,
            });
        }
        if self.published_on().is_none() {
            return Err(CatalogError::InvalidReviewDate {
                review_id: self.id.to_string(),
                date: self.date.clone(),
            });
        }
        Ok(())
    }
}

/// Headline numbers published alongside the reviews.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReviewStats {
    /// Average rating advertised for the collection.
    pub average_rating: f32,
    /// Total number of reviews behind the average.
    pub review_count: u32,
}
