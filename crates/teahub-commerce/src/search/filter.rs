//! Category filter.

use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category selected in the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Wildcard: every category matches.
    #[default]
    All,
    /// Only products in this category.
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order, wildcard first.
    pub fn options() -> [CategoryFilter; 5] {
        let [classic, masala, herbal, premium] = Category::ALL.map(CategoryFilter::Only);
        [CategoryFilter::All, classic, masala, herbal, premium]
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Check whether a category passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_order() {
        let labels: Vec<&str> = CategoryFilter::options().iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["All", "Classic", "Masala", "Herbal", "Premium"]);
    }

    #[test]
    fn test_all_matches_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_only_matches_its_category() {
        let filter = CategoryFilter::from(Category::Masala);
        assert!(filter.matches(Category::Masala));
        assert!(!filter.matches(Category::Classic));
        assert!(!filter.is_all());
    }
}
