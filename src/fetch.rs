use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

/// The page fetch gets more slack than the per-key probe calls.
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(8);
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Bounded-timeout GET returning the response body as text.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String>;
}

/// reqwest-backed fetcher used outside of tests.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String> {
        let body = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .text()
            .await?;
        Ok(body)
    }
}
