//! Order payloads
//!
//! [`OrderDraft`] is the outbound submission, built transiently at
//! checkout and not retained. [`OrderRecord`] is one row of the published
//! orders export, read back by the tracking flow and re-fetched on every
//! query.

use serde::{Deserialize, Serialize};

/// Initial status stamped on every submitted order.
pub const STATUS_PENDING: &str = "Pending";

/// Success sentinel in the form-handler response body.
pub const STATUS_SUCCESS: &str = "success";

/// Outbound order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub order_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: String,
    /// Cart contents serialized to JSON
    pub products: String,
    /// Total as a 2-decimal string
    pub total: String,
    pub status: String,
}

/// Customer details captured by the checkout form.
#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: String,
}

/// One row of the orders export.
///
/// Permissive on purpose: totals and phone numbers pass through exactly
/// as exported, malformed or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: String,
    /// Raw products text from the sheet (may contain line breaks)
    pub products: String,
    pub total: String,
    pub status: String,
}

impl OrderRecord {
    /// Parsed total; NaN when the sheet holds junk.
    pub fn total_value(&self) -> f64 {
        self.total.trim().parse().unwrap_or(f64::NAN)
    }
}

/// Response body returned by the submission endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub status: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_sentinel() {
        let ok: SubmitResponse =
            serde_json::from_str(r#"{"status":"success","orderId":"ORD-X"}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.order_id.as_deref(), Some("ORD-X"));

        let err: SubmitResponse =
            serde_json::from_str(r#"{"status":"error","message":"bad"}"#).unwrap();
        assert!(!err.is_success());
        assert_eq!(err.message.as_deref(), Some("bad"));
    }

    #[test]
    fn test_order_record_total_value() {
        let order = OrderRecord {
            total: "39.98".to_string(),
            ..Default::default()
        };
        assert_eq!(order.total_value(), 39.98);

        let junk = OrderRecord {
            total: "N/A".to_string(),
            ..Default::default()
        };
        assert!(junk.total_value().is_nan());
    }
}
