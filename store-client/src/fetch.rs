//! Transport seam
//!
//! Every network interaction in the client is a plain GET returning text
//! (CSV exports, JSON status payloads). Routing it through the [`Fetch`]
//! trait lets the flows run against an in-memory transport in tests.

use async_trait::async_trait;

use crate::{StoreConfig, StoreError, StoreResult};

/// Text-over-GET transport used by every storefront flow.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get_text(&self, url: &str) -> StoreResult<String>;
}

/// Network transport backed by reqwest.
///
/// Redirects are followed (the form handler replies through one); no
/// retry, no timeout beyond the configured transport default.
#[derive(Debug, Clone)]
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetch {
    async fn get_text(&self, url: &str) -> StoreResult<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
