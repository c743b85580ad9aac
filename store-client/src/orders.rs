//! Order submission and tracking
//!
//! Submission is a single query-encoded GET against the form-handler
//! endpoint; tracking re-fetches the full orders export and filters by
//! phone number. Neither flow retries, and no result is cached.

use shared::models::{
    Customer, OrderDraft, OrderRecord, STATUS_PENDING, SubmitResponse,
};
use shared::util::order_id;

use crate::csv::{CsvDocument, Record};
use crate::{Cart, Fetch, StoreConfig, StoreError, StoreResult};

/// Action tag carried by every submission request.
const SUBMIT_ACTION: &str = "submitOrder";

/// Build the outbound order for the current cart.
///
/// Generates the order id, serializes the cart and formats the total to
/// two decimals. Status always starts as `Pending`.
pub fn build_order(cart: &Cart, customer: &Customer) -> StoreResult<OrderDraft> {
    Ok(OrderDraft {
        order_id: order_id(),
        customer_name: customer.name.clone(),
        email: customer.email.clone(),
        phone: customer.phone.clone(),
        address: customer.address.clone(),
        payment_method: customer.payment_method.clone(),
        products: cart.serialize_items()?,
        total: format!("{:.2}", cart.total()),
        status: STATUS_PENDING.to_string(),
    })
}

/// Query-encode the submission request URL.
fn submit_url(config: &StoreConfig, draft: &OrderDraft) -> StoreResult<String> {
    let url = reqwest::Url::parse_with_params(
        &config.script_url,
        &[
            ("action", SUBMIT_ACTION),
            ("orderId", draft.order_id.as_str()),
            ("customerName", draft.customer_name.as_str()),
            ("email", draft.email.as_str()),
            ("phone", draft.phone.as_str()),
            ("address", draft.address.as_str()),
            ("paymentMethod", draft.payment_method.as_str()),
            ("products", draft.products.as_str()),
            ("total", draft.total.as_str()),
            ("status", draft.status.as_str()),
        ],
    )
    .map_err(|e| StoreError::Url(e.to_string()))?;
    Ok(url.to_string())
}

/// Submit one order. Exactly one attempt.
///
/// Success is the `status == "success"` sentinel in the JSON reply and
/// returns the acknowledged order id (the endpoint may normalize the
/// submitted one; absent, the draft id stands). Any other outcome is an
/// error; the caller keeps the cart intact so the user can retry, and
/// clears it only on success.
pub async fn submit_order(
    fetch: &dyn Fetch,
    config: &StoreConfig,
    draft: &OrderDraft,
) -> StoreResult<String> {
    let url = submit_url(config, draft)?;
    let body = fetch.get_text(&url).await?;

    let response: SubmitResponse = serde_json::from_str(&body)
        .map_err(|_| StoreError::InvalidResponse("submission reply was not valid JSON".into()))?;

    if response.is_success() {
        let order_id = response.order_id.unwrap_or_else(|| draft.order_id.clone());
        tracing::info!(%order_id, "order accepted");
        Ok(order_id)
    } else {
        let message = response
            .message
            .unwrap_or_else(|| "Order submission failed".to_string());
        tracing::warn!(%message, "order rejected");
        Err(StoreError::Submit(message))
    }
}

/// Normalize one orders-export row.
///
/// Permissive by design: totals and phone numbers pass through exactly
/// as exported.
pub fn order_from_record(record: &Record<'_>) -> OrderRecord {
    OrderRecord {
        order_id: record
            .get_or(&["orderId", "OrderId", "Order ID"], "")
            .to_string(),
        customer_name: record
            .get_or(&["customerName", "CustomerName", "Customer Name"], "")
            .to_string(),
        email: record.get_or(&["email", "Email"], "").to_string(),
        phone: record.get_or(&["phone", "Phone"], "").to_string(),
        address: record.get_or(&["address", "Address"], "").to_string(),
        payment_method: record
            .get_or(&["paymentMethod", "PaymentMethod", "Payment Method"], "")
            .to_string(),
        products: record.get_or(&["products", "Products"], "").to_string(),
        total: record.get_or(&["total", "Total", "Total Amount"], "0").to_string(),
        status: record
            .get_or(&["status", "Status"], STATUS_PENDING)
            .to_string(),
    }
}

/// Decode the published orders export.
///
/// Order rows may carry trailing spill-over fields (embedded newlines in
/// the products column upstream), so admission is field count ≥ headers.
pub fn decode_orders(text: &str) -> Vec<OrderRecord> {
    let doc = CsvDocument::parse(text);
    doc.records_at_least()
        .map(|record| order_from_record(&record))
        .collect()
}

/// Fetch the full export and keep rows whose phone field equals `phone`
/// exactly — no formatting normalization. An empty result is a normal
/// state, not an error; always the full export, every query.
pub async fn track_orders(
    fetch: &dyn Fetch,
    config: &StoreConfig,
    phone: &str,
) -> StoreResult<Vec<OrderRecord>> {
    let body = fetch.get_text(&config.orders_url).await?;
    let orders: Vec<OrderRecord> = decode_orders(&body)
        .into_iter()
        .filter(|order| order.phone == phone)
        .collect();
    tracing::info!(phone, count = orders.len(), "order lookup complete");
    Ok(orders)
}
