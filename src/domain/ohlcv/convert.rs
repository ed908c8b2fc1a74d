//! Candle normalization — single-candle conversion plus the batch
//! sort/filter/limit pipeline.

use super::{Candle, VOLUME_PLACEHOLDER};
use crate::error::SdkError;

/// Convert one raw 5-field candle `[ts_seconds, o, h, l, c]` into a unified
/// candle with a millisecond timestamp and the volume placeholder.
pub fn normalize_one(raw: &[f64]) -> Result<Candle, SdkError> {
    if raw.len() < 5 {
        return Err(SdkError::MalformedCandle { got: raw.len() });
    }

    Ok(Candle {
        timestamp: (raw[0] * 1000.0) as i64,
        open: raw[1],
        high: raw[2],
        low: raw[3],
        close: raw[4],
        volume: VOLUME_PLACEHOLDER,
    })
}

/// Normalize a batch of raw candles.
///
/// The result is sorted ascending by timestamp (ties keep no particular
/// order), filtered to `timestamp >= since` when `since` is given, then
/// limited: `prefer_tail` keeps the chronologically most recent `limit`
/// candles, otherwise the oldest.
pub fn normalize_batch(
    raw: &[Vec<f64>],
    since: Option<i64>,
    limit: Option<usize>,
    prefer_tail: bool,
) -> Result<Vec<Candle>, SdkError> {
    let mut parsed = raw
        .iter()
        .map(|candle| normalize_one(candle))
        .collect::<Result<Vec<_>, _>>()?;

    parsed.sort_unstable_by_key(|c| c.timestamp);

    if let Some(since) = since {
        parsed.retain(|c| c.timestamp >= since);
    }

    if let Some(limit) = limit {
        if parsed.len() > limit {
            if prefer_tail {
                parsed.drain(..parsed.len() - limit);
            } else {
                parsed.truncate(limit);
            }
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_batch() -> Vec<Vec<f64>> {
        vec![
            vec![1704286800.0, 2247.9, 2250.0, 2240.0, 2245.5],
            vec![1704290400.0, 2245.5, 2260.0, 2243.0, 2258.3],
            vec![1704294000.0, 2258.3, 2265.0, 2255.0, 2262.1],
        ]
    }

    #[test]
    fn test_normalize_one() {
        let candle = normalize_one(&[1704286800.0, 2247.9, 2250.0, 2240.0, 2245.5]).unwrap();
        assert_eq!(candle.timestamp, 1704286800 * 1000);
        assert_eq!(candle.open, 2247.9);
        assert_eq!(candle.high, 2250.0);
        assert_eq!(candle.low, 2240.0);
        assert_eq!(candle.close, 2245.5);
        assert_eq!(candle.volume, 0.0);
    }

    #[test]
    fn test_normalize_one_truncates_fractional_seconds() {
        let candle = normalize_one(&[1704286800.5, 1.0, 2.0, 0.5, 1.5]).unwrap();
        assert_eq!(candle.timestamp, 1704286800500);
    }

    #[test]
    fn test_normalize_one_too_short() {
        let err = normalize_one(&[1704286800.0, 2247.9, 2250.0, 2240.0]).unwrap_err();
        match err {
            SdkError::MalformedCandle { got } => assert_eq!(got, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalize_one_extra_fields_ignored() {
        let candle = normalize_one(&[1.0, 2.0, 3.0, 4.0, 5.0, 99.0]).unwrap();
        assert_eq!(candle.volume, 0.0);
        assert_eq!(candle.close, 5.0);
    }

    #[test]
    fn test_batch_sorts_ascending() {
        let mut raw = raw_batch();
        raw.reverse();
        let parsed = normalize_batch(&raw, None, None, true).unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(parsed.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(parsed[0].timestamp, 1704286800000);
    }

    #[test]
    fn test_batch_since_filter() {
        let since = 1704290400 * 1000;
        let parsed = normalize_batch(&raw_batch(), Some(since), None, true).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed.iter().all(|c| c.timestamp >= since));
    }

    #[test]
    fn test_batch_limit_tail() {
        let parsed = normalize_batch(&raw_batch(), None, Some(2), true).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].timestamp, 1704290400000);
        assert_eq!(parsed[0].close, 2258.3);
        assert_eq!(parsed[1].timestamp, 1704294000000);
        assert_eq!(parsed[1].close, 2262.1);
    }

    #[test]
    fn test_batch_limit_head() {
        let parsed = normalize_batch(&raw_batch(), None, Some(2), false).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].timestamp, 1704286800000);
        assert_eq!(parsed[1].timestamp, 1704290400000);
    }

    #[test]
    fn test_batch_limit_larger_than_batch() {
        let parsed = normalize_batch(&raw_batch(), None, Some(10), true).unwrap();
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn test_batch_propagates_malformed_candle() {
        let mut raw = raw_batch();
        raw.push(vec![1704297600.0, 2262.1]);
        let err = normalize_batch(&raw, None, None, true).unwrap_err();
        assert!(matches!(err, SdkError::MalformedCandle { got: 2 }));
    }

    #[test]
    fn test_batch_empty() {
        let parsed = normalize_batch(&[], Some(0), Some(5), true).unwrap();
        assert!(parsed.is_empty());
    }
}
