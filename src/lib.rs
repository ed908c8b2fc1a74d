//! # gmx-ccxt
//!
//! A CCXT-style unified market-data adapter for the GMX protocol.
//!
//! Client code written against the conventional exchange interface — unified
//! `"BASE/USD"` symbols, 6-field OHLCV arrays, long/short open-interest and
//! funding-rate records — can consume GMX data with minimal modification.
//! The SDK is read-only: no order placement, no positions, no on-chain
//! transactions.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Shared** — Timeframes, fixed-point scaling helpers
//! 2. **HTTP** — `GmxHttp` REST client with per-endpoint retry policies
//! 3. **Subsquid** — `SubsquidHttp` GraphQL client for indexed history
//! 4. **Domains** — Vertical slices: market registry, OHLCV normalizer,
//!    open-interest/funding normalizer
//! 5. **High-Level Client** — `GmxClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gmx_ccxt::prelude::*;
//!
//! let client = GmxClient::builder().build()?;
//!
//! let markets = client.markets().load(false).await?;
//! let candles = client.ohlcv().fetch("ETH/USD", "1h", None, Some(100)).await?;
//! let funding = client.metrics().funding_rate("ETH/USD").await?;
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared types used across all domains.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// REST client with retry policies.
pub mod http;

// ── Layer 3: Subsquid ────────────────────────────────────────────────────────

/// GraphQL client for indexed historical data.
pub mod subsquid;

// ── Layer 4: Domains ─────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `GmxClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Timeframe, GMX_USD_SCALE};

    // Domain types — market
    pub use crate::domain::market::{Limits, Market, MarketRegistry, Precision};

    // Domain types — ohlcv
    pub use crate::domain::ohlcv::{normalize_batch, normalize_one, Candle};

    // Domain types — metrics
    pub use crate::domain::metrics::{
        normalize_borrowing_rate, normalize_funding_rate, normalize_open_interest, BorrowingRate,
        FundingRate, OpenInterest, RawFundingRate, RawOpenInterest,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_REST_URL, DEFAULT_SUBSQUID_URL};

    // HTTP client + sub-clients
    pub use crate::client::{
        GmxClient, GmxClientBuilder, MarketsClient, MetricsClient, MetricsSource, OhlcvClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
