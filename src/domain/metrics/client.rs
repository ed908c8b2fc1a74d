//! Metrics sub-client — open interest and funding rate queries.

use crate::client::{GmxClient, MetricsSource};
use crate::domain::market::Market;
use crate::domain::metrics::{
    convert, BorrowingRate, FundingRate, OpenInterest, RawFundingRate, RawOpenInterest,
};
use crate::domain::metrics::wire::MarketInfoResponse;
use crate::error::{HttpError, SdkError};
use crate::shared::{now_ms, GMX_USD_SCALE};

/// Sub-client for open-interest and funding-rate operations.
pub struct Metrics<'a> {
    pub(crate) client: &'a GmxClient,
}

impl<'a> Metrics<'a> {
    /// Fetch the current open interest for a unified symbol.
    pub async fn open_interest(&self, symbol: &str) -> Result<OpenInterest, SdkError> {
        let market = self.client.market_for(symbol).await?;

        match self.client.metrics_source {
            MetricsSource::Rest => {
                let maps = self.client.http.get_open_interest().await?;
                convert::normalize_open_interest(
                    &market.base,
                    RawOpenInterest::Passthrough(&maps),
                    now_ms(),
                )
            }
            MetricsSource::Subsquid => {
                let record = self.latest_market_info(&market).await?;
                convert::normalize_open_interest(
                    &market.base,
                    RawOpenInterest::FixedPoint {
                        record: &record,
                        scale: GMX_USD_SCALE,
                    },
                    now_ms(),
                )
            }
        }
    }

    /// Fetch the current funding rate for a unified symbol.
    pub async fn funding_rate(&self, symbol: &str) -> Result<FundingRate, SdkError> {
        let market = self.client.market_for(symbol).await?;

        match self.client.metrics_source {
            MetricsSource::Rest => {
                let maps = self.client.http.get_funding_rates().await?;
                convert::normalize_funding_rate(
                    &market.base,
                    RawFundingRate::Passthrough(&maps),
                    now_ms(),
                )
            }
            MetricsSource::Subsquid => {
                let record = self.latest_market_info(&market).await?;
                convert::normalize_funding_rate(
                    &market.base,
                    RawFundingRate::FixedPoint {
                        record: &record,
                        scale: GMX_USD_SCALE,
                    },
                    now_ms(),
                )
            }
        }
    }

    /// Fetch historical open-interest snapshots, most recent first.
    ///
    /// Only the indexed source can answer this; the REST feed has no history.
    pub async fn open_interest_history(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<Vec<OpenInterest>, SdkError> {
        let market = self.client.market_for(symbol).await?;
        if self.client.metrics_source != MetricsSource::Subsquid {
            return Err(SdkError::Unsupported("open interest history"));
        }

        let records = self.market_infos(&market, limit.unwrap_or(100)).await?;
        let fetched_at = now_ms();
        records
            .iter()
            .map(|record| {
                convert::normalize_open_interest(
                    &market.base,
                    RawOpenInterest::FixedPoint {
                        record,
                        scale: GMX_USD_SCALE,
                    },
                    fetched_at,
                )
            })
            .collect()
    }

    /// Fetch historical funding-rate snapshots, most recent first.
    pub async fn funding_rate_history(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<Vec<FundingRate>, SdkError> {
        let market = self.client.market_for(symbol).await?;
        if self.client.metrics_source != MetricsSource::Subsquid {
            return Err(SdkError::Unsupported("funding rate history"));
        }

        let records = self.market_infos(&market, limit.unwrap_or(100)).await?;
        let fetched_at = now_ms();
        records
            .iter()
            .map(|record| {
                convert::normalize_funding_rate(
                    &market.base,
                    RawFundingRate::FixedPoint {
                        record,
                        scale: GMX_USD_SCALE,
                    },
                    fetched_at,
                )
            })
            .collect()
    }

    /// Fetch historical borrowing-rate snapshots, most recent first.
    ///
    /// `is_long` filters to one market side. `since` is a Unix-millisecond
    /// lower bound; the indexer filters in seconds, so it is truncated
    /// accordingly. Only the indexed source reports borrowing rates.
    pub async fn borrowing_rate_history(
        &self,
        symbol: &str,
        is_long: Option<bool>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<BorrowingRate>, SdkError> {
        let market = self.client.market_for(symbol).await?;
        if self.client.metrics_source != MetricsSource::Subsquid {
            return Err(SdkError::Unsupported("borrowing rate history"));
        }

        let address = market
            .info
            .get("market_token")
            .and_then(serde_json::Value::as_str);
        let snapshots = self
            .client
            .squid
            .get_borrowing_rate_snapshots(
                address,
                is_long,
                since.map(|ms| ms / 1000),
                limit.unwrap_or(100),
            )
            .await?;

        snapshots
            .iter()
            .map(|snapshot| {
                convert::normalize_borrowing_rate(&market.base, snapshot, GMX_USD_SCALE)
            })
            .collect()
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn latest_market_info(&self, market: &Market) -> Result<MarketInfoResponse, SdkError> {
        let mut records = self.market_infos(market, 1).await?;
        records.pop().ok_or_else(|| {
            SdkError::Http(HttpError::NotFound(format!(
                "no market info snapshot for {}",
                market.symbol
            )))
        })
    }

    async fn market_infos(
        &self,
        market: &Market,
        limit: u32,
    ) -> Result<Vec<MarketInfoResponse>, SdkError> {
        // The token record carries the GMX market token address when the
        // backend knows it; without one the query is unfiltered.
        let address = market
            .info
            .get("market_token")
            .and_then(serde_json::Value::as_str);
        self.client
            .squid
            .get_market_infos(address, limit, "id_DESC")
            .await
    }
}
