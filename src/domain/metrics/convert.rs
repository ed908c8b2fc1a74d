//! Metrics normalization — raw snapshots to the unified long/short schema.

use super::wire::{BorrowingRateSnapshot, MarketInfoResponse, SideMapsResponse};
use super::{BorrowingRate, FundingRate, OpenInterest};
use crate::error::SdkError;
use crate::shared::parse_scaled;

/// Raw open-interest snapshot, tagged by source encoding.
#[derive(Debug, Clone, Copy)]
pub enum RawOpenInterest<'a> {
    /// Per-token float maps; values for `base` are read directly.
    Passthrough(&'a SideMapsResponse),
    /// Fixed-point record; USD strings are divided by `scale`.
    FixedPoint {
        record: &'a MarketInfoResponse,
        scale: f64,
    },
}

/// Raw funding-rate snapshot, tagged by source encoding.
#[derive(Debug, Clone, Copy)]
pub enum RawFundingRate<'a> {
    /// Per-token float maps of long/short rates, no direction flag.
    Passthrough(&'a SideMapsResponse),
    /// Fixed-point funding factor plus the `longsPayShorts` flag.
    FixedPoint {
        record: &'a MarketInfoResponse,
        scale: f64,
    },
}

/// Normalize an open-interest snapshot for one base token.
///
/// Missing per-token entries default to zero. Values are trusted as-is; no
/// negative-value validation.
pub fn normalize_open_interest(
    base: &str,
    raw: RawOpenInterest<'_>,
    now_ms: i64,
) -> Result<OpenInterest, SdkError> {
    let (long, short, timestamp, info) = match raw {
        RawOpenInterest::Passthrough(maps) => {
            let long = maps.long.get(base).copied().unwrap_or(0.0);
            let short = maps.short.get(base).copied().unwrap_or(0.0);
            (long, short, now_ms, serde_json::to_value(maps)?)
        }
        RawOpenInterest::FixedPoint { record, scale } => {
            let long = parse_scaled(&record.long_open_interest_usd, scale)?;
            let short = parse_scaled(&record.short_open_interest_usd, scale)?;
            (
                long,
                short,
                snapshot_ms(record, now_ms),
                serde_json::to_value(record)?,
            )
        }
    };

    Ok(OpenInterest {
        symbol: format!("{base}/USD"),
        long_open_interest: long,
        short_open_interest: short,
        open_interest_value: long + short,
        timestamp,
        info,
    })
}

/// Normalize a funding-rate snapshot for one base token.
///
/// Direction is never inferred from the sign of a magnitude: the fixed-point
/// encoding carries an explicit `longsPayShorts` flag, and the pass-through
/// encoding supplies signed long/short rates directly.
pub fn normalize_funding_rate(
    base: &str,
    raw: RawFundingRate<'_>,
    now_ms: i64,
) -> Result<FundingRate, SdkError> {
    let (aggregate, long, short, timestamp, info) = match raw {
        RawFundingRate::Passthrough(maps) => {
            let long = maps.long.get(base).copied().unwrap_or(0.0);
            let short = maps.short.get(base).copied().unwrap_or(0.0);
            let aggregate = (long + short) / 2.0;
            (aggregate, long, short, now_ms, serde_json::to_value(maps)?)
        }
        RawFundingRate::FixedPoint { record, scale } => {
            let magnitude = parse_scaled(&record.funding_factor_per_second, scale)?;
            let long = if record.longs_pay_shorts {
                magnitude
            } else {
                -magnitude
            };
            (
                magnitude,
                long,
                -long,
                snapshot_ms(record, now_ms),
                serde_json::to_value(record)?,
            )
        }
    };

    Ok(FundingRate {
        symbol: format!("{base}/USD"),
        funding_rate: aggregate,
        long_funding_rate: long,
        short_funding_rate: short,
        funding_timestamp: timestamp,
        timestamp,
        info,
    })
}

/// Normalize a borrowing-rate snapshot for one base token.
///
/// Borrowing rates only come from the indexed source, so the input is always
/// fixed-point; the snapshot carries its own timestamp.
pub fn normalize_borrowing_rate(
    base: &str,
    snapshot: &BorrowingRateSnapshot,
    scale: f64,
) -> Result<BorrowingRate, SdkError> {
    Ok(BorrowingRate {
        symbol: format!("{base}/USD"),
        borrowing_rate: parse_scaled(&snapshot.borrowing_rate, scale)?,
        is_long: snapshot.is_long,
        timestamp: snapshot.timestamp * 1000,
        info: serde_json::to_value(snapshot)?,
    })
}

fn snapshot_ms(record: &MarketInfoResponse, now_ms: i64) -> i64 {
    record.timestamp.map(|s| s * 1000).unwrap_or(now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::GMX_USD_SCALE;
    use std::collections::HashMap;

    fn side_maps(long: &[(&str, f64)], short: &[(&str, f64)]) -> SideMapsResponse {
        let build = |pairs: &[(&str, f64)]| -> HashMap<String, f64> {
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
        };
        SideMapsResponse {
            long: build(long),
            short: build(short),
        }
    }

    fn market_info(
        long_oi: &str,
        short_oi: &str,
        funding_factor: &str,
        longs_pay_shorts: bool,
    ) -> MarketInfoResponse {
        MarketInfoResponse {
            id: "1".to_string(),
            market_token_address: "0x70d95587d40A2caf56bd97485aB3Eec10Bee6336".to_string(),
            index_token_address: "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1".to_string(),
            long_token_address: "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1".to_string(),
            short_token_address: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
            long_open_interest_usd: long_oi.to_string(),
            short_open_interest_usd: short_oi.to_string(),
            long_open_interest_in_tokens: None,
            short_open_interest_in_tokens: None,
            funding_factor_per_second: funding_factor.to_string(),
            longs_pay_shorts,
            borrowing_factor_per_second_for_longs: None,
            borrowing_factor_per_second_for_shorts: None,
            timestamp: None,
        }
    }

    #[test]
    fn test_open_interest_passthrough() {
        let maps = side_maps(&[("ETH", 50_000_000.0)], &[("ETH", 45_000_000.0)]);
        let oi = normalize_open_interest("ETH", RawOpenInterest::Passthrough(&maps), 1_000).unwrap();
        assert_eq!(oi.symbol, "ETH/USD");
        assert_eq!(oi.long_open_interest, 50_000_000.0);
        assert_eq!(oi.short_open_interest, 45_000_000.0);
        assert_eq!(oi.open_interest_value, 95_000_000.0);
        assert_eq!(oi.timestamp, 1_000);
    }

    #[test]
    fn test_open_interest_passthrough_missing_token_defaults_zero() {
        let maps = side_maps(&[("ETH", 1.0)], &[]);
        let oi = normalize_open_interest("BTC", RawOpenInterest::Passthrough(&maps), 0).unwrap();
        assert_eq!(oi.long_open_interest, 0.0);
        assert_eq!(oi.short_open_interest, 0.0);
        assert_eq!(oi.open_interest_value, 0.0);
    }

    #[test]
    fn test_open_interest_fixed_point() {
        let record = market_info(
            "50000000000000000000000000000000000000",
            "45000000000000000000000000000000000000",
            "0",
            true,
        );
        let oi = normalize_open_interest(
            "ETH",
            RawOpenInterest::FixedPoint {
                record: &record,
                scale: GMX_USD_SCALE,
            },
            123,
        )
        .unwrap();
        assert_eq!(oi.long_open_interest, 50_000_000.0);
        assert_eq!(oi.short_open_interest, 45_000_000.0);
        assert_eq!(oi.open_interest_value, 95_000_000.0);
        // Raw record rides along for debugging.
        assert_eq!(oi.info["longsPayShorts"], true);
    }

    #[test]
    fn test_open_interest_fixed_point_garbage_fails() {
        let record = market_info("garbage", "0", "0", true);
        let err = normalize_open_interest(
            "ETH",
            RawOpenInterest::FixedPoint {
                record: &record,
                scale: GMX_USD_SCALE,
            },
            0,
        )
        .unwrap_err();
        assert!(matches!(err, SdkError::Scaling(_)));
    }

    #[test]
    fn test_funding_fixed_point_longs_pay() {
        let record = market_info("0", "0", "100000000000000000000000000000", true);
        let fr = normalize_funding_rate(
            "ETH",
            RawFundingRate::FixedPoint {
                record: &record,
                scale: GMX_USD_SCALE,
            },
            0,
        )
        .unwrap();
        assert!((fr.long_funding_rate - 0.0001).abs() < 1e-12);
        assert!((fr.short_funding_rate + 0.0001).abs() < 1e-12);
        // Aggregate is the unsigned magnitude for fixed-point sources.
        assert!((fr.funding_rate - 0.0001).abs() < 1e-12);
    }

    #[test]
    fn test_funding_fixed_point_shorts_pay() {
        let record = market_info("0", "0", "100000000000000000000000000000", false);
        let fr = normalize_funding_rate(
            "ETH",
            RawFundingRate::FixedPoint {
                record: &record,
                scale: GMX_USD_SCALE,
            },
            0,
        )
        .unwrap();
        assert!((fr.long_funding_rate + 0.0001).abs() < 1e-12);
        assert!((fr.short_funding_rate - 0.0001).abs() < 1e-12);
        assert!((fr.funding_rate - 0.0001).abs() < 1e-12);
    }

    #[test]
    fn test_funding_passthrough_mean_aggregate() {
        let maps = side_maps(&[("ETH", 0.0002)], &[("ETH", -0.0001)]);
        let fr =
            normalize_funding_rate("ETH", RawFundingRate::Passthrough(&maps), 7_000).unwrap();
        assert_eq!(fr.long_funding_rate, 0.0002);
        assert_eq!(fr.short_funding_rate, -0.0001);
        assert!((fr.funding_rate - 0.00005).abs() < 1e-12);
        assert_eq!(fr.funding_timestamp, 7_000);
        assert_eq!(fr.timestamp, 7_000);
    }

    #[test]
    fn test_funding_passthrough_missing_token_defaults_zero() {
        let maps = side_maps(&[], &[]);
        let fr = normalize_funding_rate("ARB", RawFundingRate::Passthrough(&maps), 0).unwrap();
        assert_eq!(fr.long_funding_rate, 0.0);
        assert_eq!(fr.short_funding_rate, 0.0);
        assert_eq!(fr.funding_rate, 0.0);
    }

    #[test]
    fn test_borrowing_rate_fixed_point() {
        let snapshot = BorrowingRateSnapshot {
            id: "1".to_string(),
            market_address: "0x70d95587d40A2caf56bd97485aB3Eec10Bee6336".to_string(),
            is_long: true,
            borrowing_rate: "1000000000000000000000000000000".to_string(),
            timestamp: 1_704_286_800,
        };
        let br = normalize_borrowing_rate("ETH", &snapshot, GMX_USD_SCALE).unwrap();
        assert_eq!(br.symbol, "ETH/USD");
        assert_eq!(br.borrowing_rate, 1.0);
        assert!(br.is_long);
        assert_eq!(br.timestamp, 1_704_286_800_000);
        assert_eq!(br.info["marketAddress"], snapshot.market_address);
    }

    #[test]
    fn test_borrowing_rate_garbage_fails() {
        let snapshot = BorrowingRateSnapshot {
            id: "1".to_string(),
            market_address: "0x70d9".to_string(),
            is_long: false,
            borrowing_rate: "garbage".to_string(),
            timestamp: 0,
        };
        let err = normalize_borrowing_rate("ETH", &snapshot, GMX_USD_SCALE).unwrap_err();
        assert!(matches!(err, SdkError::Scaling(_)));
    }

    #[test]
    fn test_snapshot_timestamp_from_record() {
        let mut record = market_info("0", "0", "0", true);
        record.timestamp = Some(1_704_286_800);
        let oi = normalize_open_interest(
            "ETH",
            RawOpenInterest::FixedPoint {
                record: &record,
                scale: GMX_USD_SCALE,
            },
            999,
        )
        .unwrap();
        assert_eq!(oi.timestamp, 1_704_286_800_000);
    }
}
