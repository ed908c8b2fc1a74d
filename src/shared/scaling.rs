//! Pure conversion module for fixed-point integer encodings.
//!
//! GMX on-chain USD values arrive as decimal strings scaled by 10^30, which
//! exceeds any machine-integer range, so conversion goes straight to `f64`.
//! No async, no network calls.

use thiserror::Error;

/// Scale of GMX fixed-point USD values (open interest, funding factors).
pub const GMX_USD_SCALE: f64 = 1e30;

/// Errors from parsing fixed-point string values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScalingError {
    #[error("invalid fixed-point value '{input}': {reason}")]
    InvalidValue { input: String, reason: String },

    #[error("scale must be positive, got {0}")]
    NonPositiveScale(f64),
}

/// Parse a fixed-point decimal string and divide by `scale`.
///
/// A scale of `1.0` is a plain pass-through parse.
pub fn parse_scaled(raw: &str, scale: f64) -> Result<f64, ScalingError> {
    if scale <= 0.0 {
        return Err(ScalingError::NonPositiveScale(scale));
    }
    let value: f64 = raw.trim().parse().map_err(|e: std::num::ParseFloatError| {
        ScalingError::InvalidValue {
            input: raw.to_string(),
            reason: e.to_string(),
        }
    })?;
    Ok(value / scale)
}
