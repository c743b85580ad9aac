//! Storefront client
//!
//! Headless client for a spreadsheet-backed storefront: loads the
//! product catalog from a published CSV export, keeps the session cart,
//! submits orders to a form-handler endpoint and looks up prior orders
//! by phone number. All state is in-memory and session-scoped.
//!
//! # Module structure
//!
//! ```text
//! store-client/src/
//! ├── config.rs    # endpoint URLs, timeouts
//! ├── error.rs     # StoreError / StoreResult
//! ├── fetch.rs     # transport seam (reqwest + test doubles)
//! ├── csv.rs       # permissive CSV decoding
//! ├── catalog.rs   # catalog loading, sorting, search
//! ├── cart.rs      # cart state transitions
//! ├── orders.rs    # order submission and tracking
//! ├── session.rs   # application state and operations
//! └── view.rs      # pure text projections of state
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod csv;
pub mod error;
pub mod fetch;
pub mod orders;
pub mod session;
pub mod view;

// Re-export 公共类型
pub use cart::Cart;
pub use catalog::{CatalogOutcome, SearchOutcome, SortKey};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use fetch::{Fetch, HttpFetch};
pub use session::StoreSession;

// Re-export shared models for convenience
pub use shared::models::{
    CartItem, Customer, OrderDraft, OrderRecord, Product, SubmitResponse,
};
