//! Tea categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tea category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Classic,
    Masala,
    Herbal,
    Premium,
}

impl Category {
    /// Every category, in the order the filter bar shows them.
    pub const ALL: [Category; 4] = [
        Category::Classic,
        Category::Masala,
        Category::Herbal,
        Category::Premium,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Classic => "Classic",
            Category::Masala => "Masala",
            Category::Herbal => "Herbal",
            Category::Premium => "Premium",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
