//! Conversion: TokenRecord → Market, token list → registry map.

use super::wire::TokenRecord;
use super::{Market, PRECISION, QUOTE};
use std::collections::HashMap;

impl From<TokenRecord> for Market {
    fn from(token: TokenRecord) -> Self {
        let base = token.symbol.clone();
        let symbol = format!("{}/{}", base, QUOTE);

        let mut info = token.extra.clone();
        info.insert(
            "symbol".to_string(),
            serde_json::Value::String(token.symbol),
        );

        Market {
            id: base.clone(),
            symbol,
            base,
            quote: QUOTE.to_string(),
            active: true,
            precision: PRECISION,
            limits: None,
            info: serde_json::Value::Object(info),
        }
    }
}

/// Build a unified-symbol → market map from a raw token list.
///
/// Records with an empty native symbol are dropped.
pub fn build_markets(tokens: Vec<TokenRecord>) -> HashMap<String, Market> {
    tokens
        .into_iter()
        .filter(|t| !t.symbol.is_empty())
        .map(|t| {
            let market = Market::from(t);
            (market.symbol.clone(), market)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(symbol: &str) -> TokenRecord {
        TokenRecord {
            symbol: symbol.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_token_to_market() {
        let market = Market::from(token("ETH"));
        assert_eq!(market.id, "ETH");
        assert_eq!(market.symbol, "ETH/USD");
        assert_eq!(market.base, "ETH");
        assert_eq!(market.quote, "USD");
        assert!(market.active);
        assert_eq!(market.precision.amount, 8);
        assert_eq!(market.precision.price, 8);
        assert!(market.limits.is_none());
    }

    #[test]
    fn test_info_preserves_raw_record() {
        let mut extra = serde_json::Map::new();
        extra.insert(
            "market_token".to_string(),
            serde_json::Value::String("0x70d9".to_string()),
        );
        let market = Market::from(TokenRecord {
            symbol: "BTC".to_string(),
            extra,
        });
        assert_eq!(market.info["symbol"], "BTC");
        assert_eq!(market.info["market_token"], "0x70d9");
    }

    #[test]
    fn test_build_markets_drops_empty_symbols() {
        let map = build_markets(vec![token("ETH"), token(""), token("BTC")]);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("ETH/USD"));
        assert!(map.contains_key("BTC/USD"));
    }
}
