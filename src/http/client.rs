//! Low-level HTTP client — `SwapHttp`.
//!
//! Returns wire types (validation and normalization happen at the client
//! boundary). Internal to the crate's high-level client, but usable directly.

use crate::domain::price::wire::PricesResponse;
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Low-level HTTP client for the price feed.
#[derive(Clone)]
pub struct SwapHttp {
    prices_url: String,
    client: Client,
}

/// Request timeout applied on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

impl SwapHttp {
    pub fn new(prices_url: &str) -> Result<Self, HttpError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(DEFAULT_TIMEOUT)
            .pool_max_idle_per_host(2);

        Ok(Self {
            prices_url: prices_url.to_string(),
            client: builder.build()?,
        })
    }

    /// Client with an explicit request timeout.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_timeout(prices_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(2)
            .build()?;
        Ok(Self {
            prices_url: prices_url.to_string(),
            client,
        })
    }

    pub fn prices_url(&self) -> &str {
        &self.prices_url
    }

    // ── Prices ───────────────────────────────────────────────────────────

    pub async fn get_prices(&self) -> Result<PricesResponse, HttpError> {
        self.get(&self.prices_url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.text().await?;
            return serde_json::from_str::<T>(&body)
                .map_err(|e| HttpError::InvalidPayload(e.to_string()));
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(url.to_string())),
            400..=499 => Err(HttpError::BadRequest {
                status: status_code,
                body: body_text,
            }),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
