//! Market domain — unified market structures and the market registry.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

pub use convert::build_markets;
pub use state::MarketRegistry;

use serde::{Deserialize, Serialize};

/// Quote currency for every GMX market. The venue prices everything in USD;
/// the quote side of a unified symbol is fixed, never derived from input.
pub const QUOTE: &str = "USD";

/// Decimal precision advertised for all GMX markets.
pub const PRECISION: Precision = Precision {
    amount: 8,
    price: 8,
};

// ─── Market ──────────────────────────────────────────────────────────────────

/// A tradable unified pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Venue-native base token identifier (e.g. `"ETH"`).
    pub id: String,
    /// Unified pair symbol, always `"{base}/USD"`.
    pub symbol: String,
    pub base: String,
    pub quote: String,
    /// Always true — the feed exposes no inactive markets.
    pub active: bool,
    pub precision: Precision,
    /// Always `None` — no min/max enforced at this layer.
    pub limits: Option<Limits>,
    /// Opaque passthrough of the original raw token record.
    pub info: serde_json::Value,
}

/// Fixed amount/price decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    pub amount: u32,
    pub price: u32,
}

/// Order size/price bounds. GMX enforces none through this feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}
