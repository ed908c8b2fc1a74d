//! High-level client — `GmxClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared registry, and accessor methods.

use crate::domain::market::client::Markets;
use crate::domain::market::{Market, MarketRegistry};
use crate::domain::metrics::client::Metrics;
use crate::domain::ohlcv::client::Ohlcv;
use crate::error::SdkError;
use crate::http::GmxHttp;
use crate::subsquid::SubsquidHttp;

use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::metrics::client::Metrics as MetricsClient;
pub use crate::domain::ohlcv::client::Ohlcv as OhlcvClient;

/// Which raw source backs the metrics domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsSource {
    /// REST float maps. Current snapshots only; history is unsupported.
    Rest,
    /// Subsquid indexer. Fixed-point encoding, history supported.
    #[default]
    Subsquid,
}

/// The primary entry point for the GMX unified market-data SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.ohlcv()`, `client.metrics()`.
pub struct GmxClient {
    pub(crate) http: GmxHttp,
    pub(crate) squid: SubsquidHttp,
    /// Market registry: unified symbol → market snapshot.
    pub(crate) registry: Arc<MarketRegistry>,
    pub(crate) metrics_source: MetricsSource,
}

impl GmxClient {
    pub fn builder() -> GmxClientBuilder {
        GmxClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn ohlcv(&self) -> Ohlcv<'_> {
        Ohlcv { client: self }
    }

    pub fn metrics(&self) -> Metrics<'_> {
        Metrics { client: self }
    }

    /// Resolve a unified symbol, auto-loading markets on first use.
    pub(crate) async fn market_for(&self, symbol: &str) -> Result<Market, SdkError> {
        if !self.registry.is_loaded().await {
            self.markets().load(false).await?;
        }
        self.registry.resolve(symbol).await
    }
}

impl Clone for GmxClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            squid: self.squid.clone(),
            registry: self.registry.clone(),
            metrics_source: self.metrics_source,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct GmxClientBuilder {
    rest_url: String,
    subsquid_url: String,
    metrics_source: MetricsSource,
}

impl Default for GmxClientBuilder {
    fn default() -> Self {
        Self {
            rest_url: crate::network::DEFAULT_REST_URL.to_string(),
            subsquid_url: crate::network::DEFAULT_SUBSQUID_URL.to_string(),
            metrics_source: MetricsSource::default(),
        }
    }
}

impl GmxClientBuilder {
    pub fn rest_url(mut self, url: &str) -> Self {
        self.rest_url = url.to_string();
        self
    }

    pub fn subsquid_url(mut self, url: &str) -> Self {
        self.subsquid_url = url.to_string();
        self
    }

    /// Select which raw source backs the metrics domain.
    pub fn metrics_source(mut self, source: MetricsSource) -> Self {
        self.metrics_source = source;
        self
    }

    pub fn build(self) -> Result<GmxClient, SdkError> {
        Ok(GmxClient {
            http: GmxHttp::new(&self.rest_url),
            squid: SubsquidHttp::new(&self.subsquid_url),
            registry: Arc::new(MarketRegistry::new()),
            metrics_source: self.metrics_source,
        })
    }
}
