//! Customer reviews shown in the testimonial carousel.

mod data;
mod review;

pub use review::{Review, ReviewStats, MAX_STARS};

use std::collections::HashSet;

use crate::error::CatalogError;

/// The reviews shipped with the site, in carousel order.
pub fn builtin_reviews() -> Vec<Review> {
    data::builtin_reviews()
}

/// Validate a list of reviews, including id uniqueness.
pub fn validate_reviews(reviews: &[Review]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for review in reviews {
        review.validate()?;
        if !seen.insert(review.id.as_str()) {
            return Err(CatalogError::DuplicateId(review.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_reviews_are_valid() {
        let reviews = builtin_reviews();
        assert_eq!(reviews.len(), 5);
        assert!(validate_reviews(&reviews).is_ok());
    }

    #[test]
    fn test_duplicate_review_ids_rejected() {
        let mut reviews = builtin_reviews();
        reviews[1].id = reviews[0].id.clone();
        assert_eq!(
            validate_reviews(&reviews),
            Err(CatalogError::DuplicateId("1".to_string()))
        );
    }
}
