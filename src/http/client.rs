//! Low-level HTTP client — `GmxHttp`.
//!
//! One method per REST endpoint. Returns wire types (conversion to unified
//! types happens at the domain layer). Internal to the SDK — the high-level
//! client wraps this.

use crate::domain::market::wire::TokensResponse;
use crate::domain::metrics::wire::SideMapsResponse;
use crate::domain::ohlcv::wire::CandlesResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::Timeframe;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the GMX REST API.
pub struct GmxHttp {
    base_url: String,
    client: Client,
}

impl GmxHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    // ── Tokens ───────────────────────────────────────────────────────────

    /// Fetch the list of tradable tokens.
    pub async fn get_tokens(&self) -> Result<TokensResponse, HttpError> {
        let url = format!("{}/tokens", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Candles ──────────────────────────────────────────────────────────

    /// Fetch recent candles for a native token symbol.
    ///
    /// The backend returns 5-field candles `[ts_seconds, o, h, l, c]` with
    /// no volume. Window filtering is done client-side by the normalizer.
    pub async fn get_candlesticks(
        &self,
        token_symbol: &str,
        period: Timeframe,
    ) -> Result<CandlesResponse, HttpError> {
        let url = format!(
            "{}/prices/candles?tokenSymbol={}&period={}",
            self.base_url,
            token_symbol,
            period.as_str()
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Metrics (pass-through encoding) ──────────────────────────────────

    /// Fetch current open interest as per-token long/short USD float maps.
    pub async fn get_open_interest(&self) -> Result<SideMapsResponse, HttpError> {
        let url = format!("{}/open_interest", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    /// Fetch current funding rates as per-token long/short float maps.
    pub async fn get_funding_rates(&self) -> Result<SideMapsResponse, HttpError> {
        let url = format!("{}/funding_rates", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_get(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut attempt = 0;
        loop {
            let error = match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            let should_retry = match &error {
                HttpError::ServerError { status, .. } => {
                    config.retryable_statuses.contains(status)
                }
                HttpError::RateLimited { retry_after_ms } => {
                    if let Some(ms) = retry_after_ms {
                        futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                    }
                    true
                }
                HttpError::Timeout => true,
                HttpError::Reqwest(re) => re.is_connect() || re.is_timeout() || re.is_request(),
                _ => false,
            };

            if !should_retry {
                return Err(error);
            }
            if attempt >= config.max_retries {
                return Err(HttpError::MaxRetriesExceeded {
                    attempts: attempt + 1,
                    last_error: error.to_string(),
                });
            }

            let delay = config.delay_for_attempt(attempt);
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                "Retrying request to {}",
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for GmxHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
        }
    }
}
