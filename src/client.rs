//! High-level client — `SwapClient` with the prices sub-client and the fetch
//! lifecycle for a [`SwapState`].

use crate::domain::price::client::Prices;
use crate::domain::price::PriceBook;
use crate::domain::swap::{Action, Signal, SwapState};
use crate::error::SwapError;
use crate::http::SwapHttp;

use async_lock::RwLock;
use std::sync::Arc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::price::client::Prices as PricesClient;

/// The primary entry point for loading prices into a swap form.
#[derive(Clone)]
pub struct SwapClient {
    pub(crate) http: SwapHttp,
    /// Last successfully fetched book.
    pub(crate) latest_book: Arc<RwLock<Option<PriceBook>>>,
}

impl SwapClient {
    pub fn builder() -> SwapClientBuilder {
        SwapClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    // ── Form lifecycle ───────────────────────────────────────────────────

    /// Fetch prices and drive `state` through the load transitions.
    ///
    /// Emits `FetchStarted` and then exactly one of `PricesLoaded` or
    /// `PricesFailed`. Errors never escape: a failed fetch comes back as a
    /// [`Signal::FetchFailed`].
    pub async fn load_into(&self, state: &mut SwapState) -> Option<Signal> {
        state.apply(Action::FetchStarted);
        match self.prices().fetch().await {
            Ok(book) => state.apply(Action::PricesLoaded(book)),
            Err(err) => {
                tracing::warn!(url = self.http.prices_url(), "Price fetch failed: {}", err);
                state.apply(Action::PricesFailed(err.to_string()))
            }
        }
    }

    /// Drop the cached book.
    pub async fn clear_cache(&self) {
        *self.latest_book.write().await = None;
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for [`SwapClient`].
///
/// The default feed URL is https. With only the default `http` feature,
/// reqwest has no TLS backend on native targets, so enable the `native`
/// feature to reach it. WASM builds use the browser's TLS.
pub struct SwapClientBuilder {
    prices_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Duration,
}

impl Default for SwapClientBuilder {
    fn default() -> Self {
        Self {
            prices_url: crate::network::DEFAULT_PRICES_URL.to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            timeout: crate::http::client::DEFAULT_TIMEOUT,
        }
    }
}

impl SwapClientBuilder {
    pub fn prices_url(mut self, url: &str) -> Self {
        self.prices_url = url.to_string();
        self
    }

    /// Request timeout (native only; the browser owns timeouts on WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<SwapClient, SwapError> {
        #[cfg(not(target_arch = "wasm32"))]
        let http = SwapHttp::with_timeout(&self.prices_url, self.timeout)?;
        #[cfg(target_arch = "wasm32")]
        let http = SwapHttp::new(&self.prices_url)?;

        Ok(SwapClient {
            http,
            latest_book: Arc::new(RwLock::new(None)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_public_feed() {
        let client = SwapClient::builder().build().unwrap();
        assert_eq!(client.http.prices_url(), crate::network::DEFAULT_PRICES_URL);
    }

    #[test]
    fn test_cache_starts_empty() {
        let client = SwapClient::builder()
            .prices_url("http://127.0.0.1:9/prices.json")
            .build()
            .unwrap();
        assert!(tokio_test::block_on(client.prices().cached()).is_none());
        tokio_test::block_on(client.clear_cache());
        assert!(tokio_test::block_on(client.prices().cached()).is_none());
    }
}
