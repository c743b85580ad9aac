//! Cart state transitions
//!
//! In-memory mapping of product identity to chosen quantity/variant. All
//! mutations are synchronous; the session re-renders its cart projection
//! immediately after each one so displayed state never diverges.

use shared::models::{CartItem, Product};

/// Session cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == id)
    }

    /// Add one unit of `id` from the catalog.
    ///
    /// Unknown ids leave the cart untouched and return false so the
    /// caller can surface a notice. A repeated add increments the
    /// existing entry instead of duplicating it.
    pub fn add(&mut self, products: &[Product], id: i64) -> bool {
        let Some(product) = products.iter().find(|p| p.id == id) else {
            tracing::warn!(id, "add to cart: product not found");
            return false;
        };

        match self.items.iter_mut().find(|item| item.product.id == id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem::new(product.clone())),
        }
        true
    }

    /// Apply a quantity delta; a result of zero or below removes the
    /// entry entirely. Unknown ids are a no-op.
    pub fn change_quantity(&mut self, id: i64, delta: i64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == id) {
            item.quantity += delta;
            if item.quantity <= 0 {
                self.remove(id);
            }
        }
    }

    /// Remove the entry for `id`. Removing an absent entry is a no-op.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|item| item.product.id != id);
    }

    /// Σ quantity over all entries (the badge count).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Σ parsed price × quantity, tolerant of text-typed prices.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart contents as the JSON payload carried by order submission.
    pub fn serialize_items(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }
}
