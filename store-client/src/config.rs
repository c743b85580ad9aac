//! Client configuration

/// Published products export (CSV).
pub const DEFAULT_CATALOG_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRuxfN3pkRvY7gU6w474iyADXj69wz4jVQI0qWMFqqJe0lmKBqSe8Z5yIwNZ5wnPmq_MNWaIjIWE6vo/pub?gid=512772452&single=true&output=csv";

/// Published orders export (CSV).
pub const DEFAULT_ORDERS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRuxfN3pkRvY7gU6w474iyADXj69wz4jVQI0qWMFqqJe0lmKBqSe8Z5yIwNZ5wnPmq_MNWaIjIWE6vo/pub?gid=1214934860&single=true&output=csv";

/// Form-handler endpoint receiving submitted orders.
pub const DEFAULT_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbwbxP0c4eI1KvjrFYazyaqXTOpxF2X0tLuPuDtCmbczOA1V2yMs8aWMc115GMQNA8WIcA/exec";

/// Storefront endpoints and transport settings
///
/// # Environment variables
///
/// All fields can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STORE_CATALOG_URL | published products export | catalog CSV source |
/// | STORE_ORDERS_URL | published orders export | orders CSV source |
/// | STORE_SCRIPT_URL | form-handler endpoint | order submission |
/// | STORE_TIMEOUT_SECS | 30 | request timeout (seconds) |
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Products export URL
    pub catalog_url: String,
    /// Orders export URL
    pub orders_url: String,
    /// Order submission endpoint
    pub script_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Fixed production endpoints.
    pub fn new() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            orders_url: DEFAULT_ORDERS_URL.to_string(),
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Load configuration, with environment overrides where set.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(url) = std::env::var("STORE_CATALOG_URL") {
            config.catalog_url = url;
        }
        if let Ok(url) = std::env::var("STORE_ORDERS_URL") {
            config.orders_url = url;
        }
        if let Ok(url) = std::env::var("STORE_SCRIPT_URL") {
            config.script_url = url;
        }
        if let Ok(secs) = std::env::var("STORE_TIMEOUT_SECS")
            && let Ok(secs) = secs.parse()
        {
            config.timeout_secs = secs;
        }
        config
    }

    /// Point the catalog load at a different export (tests).
    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    /// Point order tracking at a different export (tests).
    pub fn with_orders_url(mut self, url: impl Into<String>) -> Self {
        self.orders_url = url.into();
        self
    }

    /// Point order submission at a different endpoint (tests).
    pub fn with_script_url(mut self, url: impl Into<String>) -> Self {
        self.script_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
