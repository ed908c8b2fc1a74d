//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Unified domain types (the shapes CCXT-style callers expect)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — Conversions and normalization logic
//! - `state.rs` — State containers (where the domain holds state)
//! - `client.rs` — Sub-client with fetch methods

pub mod market;
pub mod metrics;
pub mod ohlcv;
