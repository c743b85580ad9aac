//! Shared types for the storefront client
//!
//! Data models used across the catalog pipeline and the order flows,
//! plus order-id generation and time helpers.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
