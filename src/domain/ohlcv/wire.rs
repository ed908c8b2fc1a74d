//! Wire types for the candle endpoint (REST).

use serde::{Deserialize, Serialize};

/// REST response for a candle query.
///
/// Each raw candle is `[timestamp_seconds, open, high, low, close]` — five
/// numeric fields, no volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandlesResponse {
    #[serde(default)]
    pub candles: Vec<Vec<f64>>,
    #[serde(default)]
    pub period: Option<String>,
}
