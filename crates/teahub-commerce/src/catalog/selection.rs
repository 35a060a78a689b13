//! Per-product size selection.

use std::collections::HashMap;

use crate::catalog::{Product, SizeOption};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Which size each product card currently shows.
///
/// Products without an entry show their first size. Selections are keyed by
/// product id, so changing one card never touches another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeSelections {
    selected: HashMap<ProductId, usize>,
}

impl SizeSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a size for a product.
    ///
    /// An index outside the product's size list is rejected and the previous
    /// selection is kept.
    pub fn select(&mut self, product: &Product, index: usize) -> Result<(), CatalogError> {
        if index >= product.sizes.len() {
            log::warn!(
                "rejected size index {} for {} ({} sizes)",
                index,
                product.id,
                product.sizes.len()
            );
            return Err(CatalogError::SizeOutOfRange {
                product_id: product.id.to_string(),
                index,
                available: product.sizes.len(),
            });
        }

        log::debug!("size {} selected for {}", index, product.id);
        self.selected.insert(product.id.clone(), index);
        Ok(())
    }

    /// Index of the selected size for a product.
    pub fn index_for(&self, product: &Product) -> usize {
        self.selected
            .get(&product.id)
            .copied()
            .filter(|&i| i < product.sizes.len())
            .unwrap_or(0)
    }

    /// The selected size option, or `None` for a product without sizes.
    pub fn selected<'a>(&self, product: &'a Product) -> Option<&'a SizeOption> {
        product.size(self.index_for(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_defaults_to_first_size() {
        let catalog = Catalog::builtin();
        let selections = SizeSelections::new();

        for product in &catalog {
            assert_eq!(selections.index_for(product), 0);
            assert_eq!(selections.selected(product), product.sizes.first());
        }
    }

    #[test]
    fn test_select_updates_only_that_product() {
        let catalog = Catalog::builtin();
        let mut selections = SizeSelections::new();
        let earl_grey = &catalog.products()[0];
        let masala = &catalog.products()[3];

        selections.select(earl_grey, 2).unwrap();

        assert_eq!(selections.index_for(earl_grey), 2);
        assert_eq!(selections.selected(earl_grey).map(|s| s.label.as_str()), Some("250g"));
        for product in catalog.iter().skip(1) {
            assert_eq!(selections.index_for(product), 0);
        }

        selections.select(masala, 1).unwrap();
        assert_eq!(selections.index_for(earl_grey), 2);
        assert_eq!(selections.index_for(masala), 1);
    }

    #[test]
    fn test_out_of_range_keeps_previous() {
        let catalog = Catalog::builtin();
        let mut selections = SizeSelections::new();
        let darjeeling = &catalog.products()[2];

        selections.select(darjeeling, 1).unwrap();
        let err = selections.select(darjeeling, 2).unwrap_err();

        assert_eq!(
            err,
            CatalogError::SizeOutOfRange {
                product_id: "darjeeling-first-flush".to_string(),
                index: 2,
                available: 2,
            }
        );
        assert_eq!(selections.index_for(darjeeling), 1);
    }
}
