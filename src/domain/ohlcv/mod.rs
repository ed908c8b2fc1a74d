//! OHLCV domain — candle normalization from the 5-field venue format to the
//! 6-field unified format.

pub mod client;
mod convert;
pub mod wire;

pub use convert::{normalize_batch, normalize_one};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Volume placeholder for normalized candles. The venue's candle feed carries
/// no volume, so every candle reports numeric zero rather than an absent
/// marker.
pub const VOLUME_PLACEHOLDER: f64 = 0.0;

/// One normalized OHLCV observation.
///
/// Serializes as the conventional 6-element array
/// `[timestamp_ms, open, high, low, close, volume]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    /// Bucket start, Unix milliseconds.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// The candle as a flat array, timestamp included as `f64`.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.timestamp as f64,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
        ]
    }
}

impl Serialize for Candle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(6))?;
        seq.serialize_element(&self.timestamp)?;
        seq.serialize_element(&self.open)?;
        seq.serialize_element(&self.high)?;
        seq.serialize_element(&self.low)?;
        seq.serialize_element(&self.close)?;
        seq.serialize_element(&self.volume)?;
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_serializes_as_array() {
        let candle = Candle {
            timestamp: 1704286800000,
            open: 2247.9,
            high: 2250.0,
            low: 2240.0,
            close: 2245.5,
            volume: VOLUME_PLACEHOLDER,
        };
        let json = serde_json::to_string(&candle).unwrap();
        assert_eq!(json, "[1704286800000,2247.9,2250.0,2240.0,2245.5,0.0]");
    }

    #[test]
    fn test_candle_to_array() {
        let candle = Candle {
            timestamp: 1704286800000,
            open: 2247.9,
            high: 2250.0,
            low: 2240.0,
            close: 2245.5,
            volume: VOLUME_PLACEHOLDER,
        };
        assert_eq!(
            candle.to_array(),
            [1704286800000.0, 2247.9, 2250.0, 2240.0, 2245.5, 0.0]
        );
    }
}
