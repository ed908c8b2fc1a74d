//! GraphQL client for the GMX Subsquid endpoint — `SubsquidHttp`.
//!
//! Provides the indexed-query raw source: historical market snapshots with
//! fixed-point USD encodings. Queries are plain POSTs with no retry; remote-
//! reported query errors surface as `SdkError::Query`.

use crate::domain::metrics::wire::{BorrowingRateSnapshot, MarketInfoResponse};
use crate::error::{HttpError, SdkError};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Debug)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize, Debug)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug)]
struct MarketInfosData {
    #[serde(rename = "marketInfos")]
    market_infos: Vec<MarketInfoResponse>,
}

#[derive(Deserialize, Debug)]
struct BorrowingRateSnapshotsData {
    #[serde(rename = "borrowingRateSnapshots")]
    borrowing_rate_snapshots: Vec<BorrowingRateSnapshot>,
}

/// Build the `where` clause for a borrowing-rate snapshot query.
fn borrowing_where_clause(
    market_address: Option<&str>,
    is_long: Option<bool>,
    since_timestamp: Option<i64>,
) -> String {
    let mut conditions = Vec::new();
    if let Some(addr) = market_address {
        conditions.push(format!("marketAddress_eq: \"{addr}\""));
    }
    if let Some(is_long) = is_long {
        conditions.push(format!("isLong_eq: {is_long}"));
    }
    if let Some(since) = since_timestamp {
        conditions.push(format!("timestamp_gte: {since}"));
    }

    if conditions.is_empty() {
        String::new()
    } else {
        format!("where: {{ {} }}", conditions.join(", "))
    }
}

/// GraphQL client for the GMX Subsquid endpoint.
pub struct SubsquidHttp {
    endpoint: String,
    client: Client,
}

impl SubsquidHttp {
    pub fn new(endpoint: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            endpoint: endpoint.to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    /// Execute a GraphQL query and unwrap the `data` envelope.
    pub async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, SdkError> {
        let payload = serde_json::json!({ "query": query });

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(HttpError::from)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SdkError::Http(HttpError::ServerError {
                status: status.as_u16(),
                body,
            }));
        }

        let parsed: GraphQlResponse<T> =
            resp.json().await.map_err(HttpError::from)?;

        if !parsed.errors.is_empty() {
            let messages: Vec<&str> =
                parsed.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(SdkError::Query(messages.join("; ")));
        }

        parsed
            .data
            .ok_or_else(|| SdkError::Query("response has no data".to_string()))
    }

    /// Fetch market info snapshots (open interest, funding factors).
    ///
    /// `market_address` filters to one market; `order_by` follows the squid
    /// convention (e.g. `"id_DESC"`).
    pub async fn get_market_infos(
        &self,
        market_address: Option<&str>,
        limit: u32,
        order_by: &str,
    ) -> Result<Vec<MarketInfoResponse>, SdkError> {
        let where_clause = match market_address {
            Some(addr) => format!("where: {{ marketTokenAddress_eq: \"{}\" }}", addr),
            None => String::new(),
        };

        let query = format!(
            r#"
            query {{
              marketInfos(
                {where_clause}
                orderBy: [{order_by}]
                limit: {limit}
              ) {{
                id
                marketTokenAddress
                indexTokenAddress
                longTokenAddress
                shortTokenAddress
                longOpenInterestUsd
                shortOpenInterestUsd
                longOpenInterestInTokens
                shortOpenInterestInTokens
                fundingFactorPerSecond
                longsPayShorts
                borrowingFactorPerSecondForLongs
                borrowingFactorPerSecondForShorts
              }}
            }}
            "#
        );

        let data: MarketInfosData = self.query(&query).await?;
        Ok(data.market_infos)
    }

    /// Fetch historical borrowing-rate snapshots, most recent first.
    ///
    /// `is_long` filters to one market side; `since_timestamp` is a
    /// Unix-second lower bound applied by the indexer.
    pub async fn get_borrowing_rate_snapshots(
        &self,
        market_address: Option<&str>,
        is_long: Option<bool>,
        since_timestamp: Option<i64>,
        limit: u32,
    ) -> Result<Vec<BorrowingRateSnapshot>, SdkError> {
        let where_clause = borrowing_where_clause(market_address, is_long, since_timestamp);

        let query = format!(
            r#"
            query {{
              borrowingRateSnapshots(
                {where_clause}
                orderBy: [timestamp_DESC]
                limit: {limit}
              ) {{
                id
                marketAddress
                isLong
                borrowingRate
                timestamp
              }}
            }}
            "#
        );

        let data: BorrowingRateSnapshotsData = self.query(&query).await?;
        Ok(data.borrowing_rate_snapshots)
    }
}

impl Clone for SubsquidHttp {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            client: self.client.clone(),
        }
    }
}
