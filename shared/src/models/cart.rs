//! Cart item model

use serde::{Deserialize, Serialize};

use super::Product;

/// Size assigned to a newly added cart entry.
pub const DEFAULT_SIZE: &str = "M";

/// Color assigned to a newly added cart entry.
pub const DEFAULT_COLOR: &str = "Black";

/// A chosen product with quantity and variant selections.
///
/// Invariant: at most one entry exists per product id; repeated adds
/// increment `quantity` instead of duplicating the entry. Session-scoped
/// only, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: i64,
    pub size: String,
    pub color: String,
}

impl CartItem {
    /// New entry with quantity 1 and default variant fields.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            size: DEFAULT_SIZE.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Parsed price × quantity for this line.
    pub fn line_total(&self) -> f64 {
        self.product.price_value() * self.quantity as f64
    }
}
