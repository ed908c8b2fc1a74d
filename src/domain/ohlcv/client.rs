//! OHLCV sub-client — unified candle queries.

use crate::client::GmxClient;
use crate::domain::ohlcv::{convert, Candle};
use crate::error::SdkError;
use crate::shared::Timeframe;

/// Sub-client for OHLCV operations.
pub struct Ohlcv<'a> {
    pub(crate) client: &'a GmxClient,
}

impl<'a> Ohlcv<'a> {
    /// Fetch normalized candles for a unified symbol.
    ///
    /// `since` is a Unix-millisecond lower bound applied client-side (the
    /// venue always returns its recent window); `limit` keeps the most
    /// recent candles. Markets are auto-loaded on first use.
    pub async fn fetch(
        &self,
        symbol: &str,
        timeframe: &str,
        since: Option<i64>,
        limit: Option<usize>,
    ) -> Result<Vec<Candle>, SdkError> {
        let period = Timeframe::parse(timeframe)
            .ok_or_else(|| SdkError::InvalidTimeframe(timeframe.to_string()))?;

        let market = self.client.market_for(symbol).await?;

        let response = self
            .client
            .http
            .get_candlesticks(&market.id, period)
            .await?;

        convert::normalize_batch(&response.candles, since, limit, true)
    }
}
