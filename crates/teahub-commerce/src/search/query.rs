//! Catalog query: category filter plus search text.

use crate::catalog::{Catalog, Product};
use crate::search::{CategoryFilter, SearchResults};
use serde::{Deserialize, Serialize};

/// The filter bar state.
///
/// A product is shown when it passes the category filter and the search text
/// occurs, ignoring case, in its name or description. The text is matched as
/// typed; an empty string matches every product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Selected category.
    pub category: CategoryFilter,
    /// Free-text search.
    pub search: String,
}

impl CatalogQuery {
    /// A query that matches the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Check whether a product passes both predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category)
            && product.matches_text(&self.search.to_lowercase())
    }

    /// Filter products, preserving their order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let needle = self.search.to_lowercase();
        products
            .iter()
            .filter(|p| self.category.matches(p.category) && p.matches_text(&needle))
            .collect()
    }

    /// Run the query against a catalog.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> SearchResults<'a> {
        let products = self.apply(catalog.products());
        log::debug!(
            "catalog query category={} search={:?} -> {}/{}",
            self.category,
            self.search,
            products.len(),
            catalog.len()
        );
        SearchResults::new(products, catalog.len())
    }

    /// Whether any filter narrows the catalog.
    pub fn is_filtered(&self) -> bool {
        !self.category.is_all() || !self.search.is_empty()
    }

    /// Reset to the wildcard category and empty search.
    pub fn clear(&mut self) {
        self.category = CategoryFilter::All;
        self.search.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_returns_full_catalog_in_order() {
        let catalog = Catalog::builtin();
        let results = CatalogQuery::new().apply(catalog.products());

        assert_eq!(results.len(), catalog.len());
        for (found, expected) in results.iter().zip(catalog.iter()) {
            assert_eq!(found.id, expected.id);
        }
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::builtin();
        let query = CatalogQuery::new().with_category(Category::Premium.into());

        assert_eq!(
            names(&query.apply(catalog.products())),
            vec!["Assam Gold", "Darjeeling First Flush"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let query = CatalogQuery::new().with_search("ASSAM");

        // Name match on Assam Gold; description match ("Upper Assam") is the same product.
        assert_eq!(names(&query.apply(catalog.products())), vec!["Assam Gold"]);
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = Catalog::builtin();
        let query = CatalogQuery::new().with_search("spring harvest");

        assert_eq!(
            names(&query.apply(catalog.products())),
            vec!["Darjeeling First Flush"]
        );
    }

    #[test]
    fn test_search_ignores_tasting_notes_and_origin() {
        let catalog = Catalog::builtin();
        // "cardamom" only appears in Masala Chai's tasting notes.
        assert!(CatalogQuery::new().with_search("cardamom").apply(catalog.products()).is_empty());
        // "Kerala" only appears in its origin.
        assert!(CatalogQuery::new().with_search("kerala").apply(catalog.products()).is_empty());
    }

    #[test]
    fn test_both_predicates_must_hold() {
        let catalog = Catalog::builtin();
        let query = CatalogQuery::new()
            .with_category(Category::Classic.into())
            .with_search("chai");

        assert!(query.apply(catalog.products()).is_empty());
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let catalog = Catalog::builtin();
        let query = CatalogQuery::new().with_search(" gold ");
        assert!(query.apply(catalog.products()).is_empty());
    }

    #[test]
    fn test_matches_agrees_with_apply() {
        let catalog = Catalog::builtin();
        for category in CategoryFilter::options() {
            for search in ["", "a", "TEA", "bergamot", "xyz"] {
                let query = CatalogQuery::new().with_category(category).with_search(search);
                let expected: Vec<&Product> =
                    catalog.iter().filter(|p| query.matches(p)).collect();
                assert_eq!(query.apply(catalog.products()), expected);
            }
        }
    }

    #[test]
    fn test_clear_restores_full_catalog() {
        let catalog = Catalog::builtin();
        let mut query = CatalogQuery::new()
            .with_category(Category::Masala.into())
            .with_search("nothing matches this");
        assert!(query.is_filtered());
        assert!(query.run(&catalog).is_empty());

        query.clear();

        assert!(!query.is_filtered());
        assert_eq!(query.category, CategoryFilter::All);
        assert_eq!(query.search, "");
        assert_eq!(query.run(&catalog).len(), catalog.len());
    }
}
