//! Filtered catalog view.

use crate::catalog::Product;

/// Products that passed a [`CatalogQuery`](crate::search::CatalogQuery).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<'a> {
    products: Vec<&'a Product>,
    total_in_catalog: usize,
}

impl<'a> SearchResults<'a> {
    pub fn new(products: Vec<&'a Product>, total_in_catalog: usize) -> Self {
        Self {
            products,
            total_in_catalog,
        }
    }

    /// Matching products in catalog order.
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when nothing matched; the page shows the empty state.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Size of the unfiltered catalog.
    pub fn total_in_catalog(&self) -> usize {
        self.total_in_catalog
    }

    /// Short summary for screen readers (e.g., "Showing 2 of 6 teas").
    pub fn summary(&self) -> String {
        format!("Showing {} of {} teas", self.len(), self.total_in_catalog)
    }

    /// Owned copies of the matching products.
    pub fn to_owned_products(&self) -> Vec<Product> {
        self.products.iter().map(|p| (*p).clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::search::CatalogQuery;

    #[test]
    fn test_summary() {
        let catalog = Catalog::builtin();
        let results = CatalogQuery::new().with_search("green").run(&catalog);
        assert_eq!(results.summary(), "Showing 1 of 6 teas");
        assert_eq!(results.total_in_catalog(), 6);
    }

    #[test]
    fn test_owned_copies_keep_order() {
        let catalog = Catalog::builtin();
        let owned = CatalogQuery::new().run(&catalog).to_owned_products();
        assert_eq!(owned, catalog.products().to_vec());
    }
}
