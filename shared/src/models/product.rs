//! Product Model

use serde::{Deserialize, Serialize};

/// Image shown when a catalog row has no usable image URL.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1560769669-975ec94e6a86?w=500";

/// Description for rows that leave the field blank.
pub const DEFAULT_DESCRIPTION: &str = "Premium quality product.";

/// Status a product must carry to be sellable.
pub const STATUS_ACTIVE: &str = "Active";

/// Product entity
///
/// Built fresh from a catalog export row on every load and superseded
/// wholesale by the next load. `id` is the 1-based row position in the
/// export. Prices stay as exported text and are parsed on use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Decimal text, e.g. "19.99"
    pub price: String,
    /// Pre-discount price, when the row carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub rating: f64,
    pub reviews: i64,
    pub description: String,
    pub stock: i64,
    pub status: String,
}

impl Product {
    /// Only in-stock `Active` products are retained in the catalog.
    pub fn is_active(&self) -> bool {
        self.stock > 0 && self.status == STATUS_ACTIVE
    }

    /// Parsed price; NaN when the exported text is not a number.
    pub fn price_value(&self) -> f64 {
        self.price.trim().parse().unwrap_or(f64::NAN)
    }

    /// Parsed original price, when present and numeric.
    pub fn original_price_value(&self) -> Option<f64> {
        self.original_price
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
    }

    /// Discounted when the original price is strictly above the current one.
    pub fn has_discount(&self) -> bool {
        match self.original_price_value() {
            Some(original) => original > self.price_value(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: &str, original: Option<&str>, stock: i64, status: &str) -> Product {
        Product {
            id: 1,
            name: "Test".to_string(),
            category: "men".to_string(),
            price: price.to_string(),
            original_price: original.map(str::to_string),
            image: DEFAULT_IMAGE_URL.to_string(),
            badge: None,
            rating: 4.0,
            reviews: 0,
            description: DEFAULT_DESCRIPTION.to_string(),
            stock,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_is_active() {
        assert!(product("9.99", None, 5, "Active").is_active());
        assert!(!product("9.99", None, 0, "Active").is_active());
        assert!(!product("9.99", None, 5, "Inactive").is_active());
        assert!(!product("9.99", None, 5, "active").is_active());
    }

    #[test]
    fn test_price_value() {
        assert_eq!(product("19.99", None, 1, "Active").price_value(), 19.99);
        assert!(product("n/a", None, 1, "Active").price_value().is_nan());
    }

    #[test]
    fn test_has_discount() {
        assert!(product("9.99", Some("19.99"), 1, "Active").has_discount());
        assert!(!product("9.99", Some("9.99"), 1, "Active").has_discount());
        assert!(!product("9.99", None, 1, "Active").has_discount());
        assert!(!product("9.99", Some("junk"), 1, "Active").has_discount());
    }
}
