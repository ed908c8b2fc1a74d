//! Wire types for the token list (REST).

use serde::{Deserialize, Serialize};

/// Raw token record from the REST API.
///
/// Only `symbol` is interpreted; everything else rides along in `extra` and
/// is preserved verbatim in `Market::info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(default)]
    pub symbol: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// REST response for the token list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokensResponse {
    #[serde(default)]
    pub tokens: Vec<TokenRecord>,
}
