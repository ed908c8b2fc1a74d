//! Metrics domain — open-interest and funding-rate normalization.
//!
//! Two raw sources feed this domain with different numeric encodings: the
//! REST feed sends plain per-token float maps, the Subsquid indexer sends
//! fixed-point decimal strings with a direction flag. The normalizer takes a
//! tagged raw-snapshot variant carrying its own scale factor and
//! sign-derivation rule, so the output schema stays single-sourced.

pub mod client;
mod convert;
pub mod wire;

pub use convert::{
    normalize_borrowing_rate, normalize_funding_rate, normalize_open_interest, RawFundingRate,
    RawOpenInterest,
};

use serde::{Deserialize, Serialize};

// ─── Snapshots ───────────────────────────────────────────────────────────────

/// Current or historical open interest for one market, USD-denominated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenInterest {
    pub symbol: String,
    pub long_open_interest: f64,
    pub short_open_interest: f64,
    /// Aggregate: long + short.
    pub open_interest_value: f64,
    /// Unix milliseconds.
    pub timestamp: i64,
    /// Opaque passthrough of the raw snapshot record.
    pub info: serde_json::Value,
}

/// Current or historical funding rate for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRate {
    pub symbol: String,
    /// Aggregate rate. Fixed-point sources report the unsigned magnitude;
    /// pass-through sources report the mean of long and short. The two are
    /// intentionally distinct schemas.
    pub funding_rate: f64,
    pub long_funding_rate: f64,
    pub short_funding_rate: f64,
    /// Unix milliseconds.
    pub funding_timestamp: i64,
    /// Unix milliseconds.
    pub timestamp: i64,
    /// Opaque passthrough of the raw snapshot record.
    pub info: serde_json::Value,
}

/// Historical borrowing rate for one side of a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingRate {
    pub symbol: String,
    /// Per-second borrowing rate, scaled out of the fixed-point encoding.
    pub borrowing_rate: f64,
    /// Side the rate applies to: long (`true`) or short positions.
    pub is_long: bool,
    /// Unix milliseconds.
    pub timestamp: i64,
    /// Opaque passthrough of the raw snapshot record.
    pub info: serde_json::Value,
}
