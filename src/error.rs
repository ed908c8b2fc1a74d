//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("markets not loaded: call load_markets() first")]
    NotLoaded,

    #[error("market {symbol} not found; known markets: {known:?}")]
    MarketNotFound { symbol: String, known: Vec<String> },

    #[error("invalid timeframe: {0} (supported: 1m, 5m, 15m, 1h, 4h, 1d)")]
    InvalidTimeframe(String),

    #[error("malformed candle: expected at least 5 fields, got {got}")]
    MalformedCandle { got: usize },

    #[error("{0} is not supported by the active data source")]
    Unsupported(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("GraphQL query error: {0}")]
    Query(String),

    #[error("fixed-point value error: {0}")]
    Scaling(#[from] crate::shared::ScalingError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("timeout")]
    Timeout,

    #[error("max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}
