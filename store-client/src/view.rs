//! Pure text projections of session state
//!
//! Rendering is a function of state only; nothing here mutates. The
//! presentation layer (markup, styling, panel toggles) stays out of this
//! crate — these projections are what it would bind to.

use shared::models::{CartItem, OrderRecord, Product};

use crate::Cart;
use crate::catalog::SearchOutcome;

/// Prompt shown before the user has typed a search query.
pub const SEARCH_PROMPT: &str = "Start typing to search products...";

/// Empty tracking state (distinct from the error notice).
pub const NO_ORDERS: &str = "No orders found for this phone number";

/// Empty cart state.
pub const EMPTY_CART: &str = "Your cart is empty\nAdd some products to get started!";

/// "$x.xx"
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

/// 5-symbol star display: floor(rating) filled, the remainder empty.
pub fn stars(rating: f64) -> String {
    let filled = rating.floor().clamp(0.0, 5.0) as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// One catalog card.
pub fn product_card(product: &Product) -> String {
    let mut lines = Vec::new();
    if let Some(badge) = &product.badge {
        lines.push(format!("[{badge}]"));
    }
    lines.push(product.name.clone());
    lines.push(product.category.clone());
    lines.push(format!("{} ({})", stars(product.rating), product.reviews));

    let mut price_line = format_price(product.price_value());
    if product.has_discount()
        && let Some(original) = product.original_price_value()
    {
        price_line.push_str(&format!(" (was {})", format_price(original)));
    }
    lines.push(price_line);
    lines.join("\n")
}

/// Product detail view: the card plus the description.
pub fn product_detail(product: &Product) -> String {
    format!("{}\n{}", product_card(product), product.description)
}

fn cart_line(item: &CartItem) -> String {
    format!(
        "{} x{} @ {} = {}",
        item.product.name,
        item.quantity,
        format_price(item.product.price_value()),
        format_price(item.line_total()),
    )
}

/// The cart panel: item lines, badge count and both total mirrors, or
/// the empty state.
pub fn cart_panel(cart: &Cart) -> String {
    if cart.is_empty() {
        return EMPTY_CART.to_string();
    }

    let mut out = String::new();
    for item in cart.items() {
        out.push_str(&cart_line(item));
        out.push('\n');
    }
    let total = format_price(cart.total());
    out.push_str(&format!("Items: {}\n", cart.item_count()));
    out.push_str(&format!("Total: {total}\n"));
    out.push_str(&format!("Checkout total: {total}"));
    out
}

/// Search panel for a given outcome.
pub fn search_results(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Prompt => SEARCH_PROMPT.to_string(),
        SearchOutcome::NoMatches => "No products found".to_string(),
        SearchOutcome::Matches(products) => products
            .iter()
            .map(|p| {
                format!(
                    "{} | {} | {}",
                    p.category,
                    p.name,
                    format_price(p.price_value())
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// One tracked order, line breaks in the products text preserved.
pub fn order_card(order: &OrderRecord) -> String {
    format!(
        "{} [{}]\nName: {}\nEmail: {}\nAddress: {}\nPayment: {}\nTotal: {}\nProducts:\n{}",
        order.order_id,
        order.status,
        order.customer_name,
        order.email,
        order.address,
        order.payment_method,
        format_price(order.total_value()),
        order.products,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.5), "★★★★☆");
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(0.9), "☆☆☆☆☆");
        assert_eq!(stars(f64::NAN), "☆☆☆☆☆");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(19.99), "$19.99");
        assert_eq!(format_price(5.0), "$5.00");
    }

    #[test]
    fn test_product_card_shows_discount() {
        let products = sample_catalog();
        let card = product_card(&products[0]);
        assert!(card.contains("[Sale]"));
        assert!(card.contains("$89.99 (was $129.99)"));
        assert!(card.contains("★★★★☆ (128)"));
    }

    #[test]
    fn test_cart_panel_states() {
        let products = sample_catalog();
        let mut cart = Cart::new();
        assert_eq!(cart_panel(&cart), EMPTY_CART);

        cart.add(&products, 2);
        cart.change_quantity(2, 1);
        let panel = cart_panel(&cart);
        assert!(panel.contains("Elegant Summer Dress x2"));
        assert!(panel.contains("Items: 2"));
        assert!(panel.contains("Total: $119.98"));
        assert!(panel.contains("Checkout total: $119.98"));
    }

    #[test]
    fn test_search_results_states() {
        assert_eq!(search_results(&SearchOutcome::Prompt), SEARCH_PROMPT);
        assert_eq!(
            search_results(&SearchOutcome::NoMatches),
            "No products found"
        );
    }
}
