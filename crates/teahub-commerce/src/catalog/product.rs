//! Product and size option types.

use crate::catalog::Category;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// A purchasable pack size (e.g., "100g") and its price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeOption {
    /// Pack label shown on the size chip.
    pub label: String,
    /// Selling price.
    pub price: Money,
    /// Pre-discount price, shown struck through.
    pub original_price: Option<Money>,
}

impl SizeOption {
    /// Create a new size option.
    pub fn new(label: impl Into<String>, price: Money) -> Self {
        Self {
            label: label.into(),
            price,
            original_price: None,
        }
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price
            .as_ref()
            .and_then(|original| self.price.discount_from(original))
    }

    /// Badge text for a discounted size, rounded to a whole percent
    /// (e.g., "Save 20%").
    pub fn savings_label(&self) -> Option<String> {
        self.discount_percentage()
            .map(|pct| format!("Save {:.0}%", pct))
    }
}

/// A tea in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category used by the filter bar.
    pub category: Category,
    /// Image path.
    pub image: String,
    /// One-line description (searched).
    pub description: String,
    /// Tasting notes.
    pub tasting_notes: String,
    /// Where the leaves come from.
    pub origin: String,
    /// Pack sizes in display order. Never empty for a valid product.
    pub sizes: Vec<SizeOption>,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Promotional badge (e.g., "Bestseller").
    pub badge: Option<String>,
}

impl Product {
    /// Create a product with no sizes yet.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            image: String::new(),
            description: String::new(),
            tasting_notes: String::new(),
            origin: String::new(),
            sizes: Vec::new(),
            rating: 0.0,
            review_count: 0,
            badge: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tasting_notes(mut self, notes: impl Into<String>) -> Self {
        self.tasting_notes = notes.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Append a size option.
    pub fn with_size(mut self, size: SizeOption) -> Self {
        self.sizes.push(size);
        self
    }

    /// Set the rating and the number of reviews behind it.
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Get a size option by index.
    pub fn size(&self, index: usize) -> Option<&SizeOption> {
        self.sizes.get(index)
    }

    /// Rating formatted with one decimal (e.g., "5.0").
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// Alt text for the product image.
    pub fn image_alt(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }

    /// Whether `needle` (already lowercased) occurs in the name or description.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }

    /// Check the invariants of a catalog entry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sizes.is_empty() {
            return Err(CatalogError::NoSizes(self.id.to_string()));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CatalogError::InvalidProductRating {
                product_id: self.id.to_string(),
                rating: self.rating,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new("earl-grey-reserve", "Earl Grey Reserve", Category::Classic)
            .with_description("A distinguished blend with Calabrian bergamot")
            .with_size(SizeOption::new("50g", Money::rupees(599)).with_original_price(Money::rupees(749)))
            .with_size(SizeOption::new("100g", Money::rupees(1099)))
            .with_rating(4.9, 128)
    }

    #[test]
    fn test_size_lookup() {
        let product = sample();
        assert_eq!(product.size(1).map(|s| s.label.as_str()), Some("100g"));
        assert!(product.size(2).is_none());
    }

    #[test]
    fn test_sale_detection() {
        let product = sample();
        let pct = product.sizes[0].discount_percentage().unwrap();
        assert!(pct > 20.0 && pct < 21.0);
        assert!(product.sizes[1].discount_percentage().is_none());
    }

    #[test]
    fn test_savings_label_only_for_discounted_sizes() {
        let product = sample();
        assert_eq!(product.sizes[0].savings_label().as_deref(), Some("Save 20%"));
        assert_eq!(product.sizes[1].savings_label(), None);

        let marked_up = SizeOption::new("25g", Money::rupees(300)).with_original_price(Money::rupees(250));
        assert_eq!(marked_up.savings_label(), None);
    }

    #[test]
    fn test_text_match_uses_name_and_description() {
        let product = sample();
        assert!(product.matches_text("earl"));
        assert!(product.matches_text("bergamot"));
        assert!(!product.matches_text("cardamom"));
    }

    #[test]
    fn test_rating_display() {
        let product = sample().with_rating(5.0, 76);
        assert_eq!(product.rating_display(), "5.0");
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let product = sample().with_rating(5.5, 1);
        assert!(matches!(
            product.validate(),
            Err(CatalogError::InvalidProductRating { .. })
        ));

        let product = sample().with_rating(-0.1, 1);
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validate_requires_sizes() {
        let product = Product::new("bare", "Bare", Category::Masala);
        assert_eq!(product.validate(), Err(CatalogError::NoSizes("bare".to_string())));
    }

    #[test]
    fn test_image_alt() {
        assert_eq!(
            sample().image_alt(),
            "Earl Grey Reserve - A distinguished blend with Calabrian bergamot"
        );
    }
}
