//! Wire types for raw metrics snapshots (REST + Subsquid).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// REST snapshot: per-token long/short float maps (pass-through encoding).
///
/// Used for both open interest (USD values) and funding rates (per-period
/// rates); the maps are keyed by native token symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SideMapsResponse {
    #[serde(default)]
    pub long: HashMap<String, f64>,
    #[serde(default)]
    pub short: HashMap<String, f64>,
}

/// Subsquid market info snapshot (fixed-point encoding).
///
/// USD values and funding factors are decimal strings scaled by 10^30.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfoResponse {
    pub id: String,
    pub market_token_address: String,
    pub index_token_address: String,
    pub long_token_address: String,
    pub short_token_address: String,
    pub long_open_interest_usd: String,
    pub short_open_interest_usd: String,
    #[serde(default)]
    pub long_open_interest_in_tokens: Option<String>,
    #[serde(default)]
    pub short_open_interest_in_tokens: Option<String>,
    pub funding_factor_per_second: String,
    pub longs_pay_shorts: bool,
    #[serde(default)]
    pub borrowing_factor_per_second_for_longs: Option<String>,
    #[serde(default)]
    pub borrowing_factor_per_second_for_shorts: Option<String>,
    /// Snapshot time in Unix seconds, when the indexer provides one.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Subsquid borrowing-rate snapshot (fixed-point encoding).
///
/// One record per market side; `is_long` tells which side the rate applies
/// to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingRateSnapshot {
    pub id: String,
    pub market_address: String,
    pub is_long: bool,
    /// Per-second borrowing factor, decimal string scaled by 10^30.
    pub borrowing_rate: String,
    /// Snapshot time in Unix seconds.
    pub timestamp: i64,
}
