//! Markets sub-client — load, resolve, list.

use crate::client::GmxClient;
use crate::domain::market::state::MarketMap;
use crate::domain::market::{convert, Market};
use crate::error::SdkError;
use std::sync::Arc;

/// Sub-client for market operations.
pub struct Markets<'a> {
    pub(crate) client: &'a GmxClient,
}

impl<'a> Markets<'a> {
    /// Load available markets, reusing the cached snapshot unless `reload`.
    pub async fn load(&self, reload: bool) -> Result<Arc<MarketMap>, SdkError> {
        let http = self.client.http.clone();
        self.client
            .registry
            .load_with(reload, move || async move {
                Ok(http.get_tokens().await?)
            })
            .await
    }

    /// Get market info for a unified symbol from the loaded registry.
    pub async fn resolve(&self, symbol: &str) -> Result<Market, SdkError> {
        self.client.registry.resolve(symbol).await
    }

    /// Fetch an uncached market list. Never reads or writes the registry.
    pub async fn list_fresh(&self) -> Result<Vec<Market>, SdkError> {
        let tokens = self.client.http.get_tokens().await?;
        let mut markets: Vec<Market> =
            convert::build_markets(tokens.tokens).into_values().collect();
        markets.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(markets)
    }
}
