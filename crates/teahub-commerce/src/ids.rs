//! Slug identifiers for catalog entries and testimonials.
//!
//! Both are plain strings on the wire; the newtypes keep a review id from
//! being passed where a product id is expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! slug_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(slug: &str) -> Self {
                Self::new(slug)
            }
        }

        impl From<String> for $name {
            fn from(slug: String) -> Self {
                Self(slug)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

slug_id!(
    /// Catalog slug, e.g. `masala-chai`.
    ProductId
);
slug_id!(
    /// Testimonial key.
    ReviewId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_display_and_conversions() {
        let id = ProductId::from("assam-gold");
        assert_eq!(id.to_string(), "assam-gold");
        assert_eq!(id.as_str(), "assam-gold");
        assert_eq!(id, ProductId::new(String::from("assam-gold")));
    }

    #[test]
    fn test_id_set_lookup_by_str() {
        let ids: HashSet<ProductId> = ["masala-chai", "earl-grey"].into_iter().map(ProductId::from).collect();
        assert!(ids.contains("earl-grey"));
        assert!(!ids.contains("oolong"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ReviewId::new("3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"3\"");
    }
}
