//! Product catalog module.
//!
//! Contains the tea categories, products with their size options, the
//! per-product size selection state and the built-in catalog data.

mod category;
mod data;
mod product;
mod selection;

pub use category::Category;
pub use product::{Product, SizeOption};
pub use selection::SizeSelections;

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::ids::ProductId;

/// An ordered, immutable list of products.
///
/// Order is significant: filtered views preserve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let catalog = Self { products };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> Self {
        Self {
            products: data::builtin_products(),
        }
    }

    /// Check every product and the uniqueness of ids.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for product in &self.products {
            product.validate()?;
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.to_string()));
            }
        }
        Ok(())
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over products in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
