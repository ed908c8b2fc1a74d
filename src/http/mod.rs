//! HTTP client layer — `GmxHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::GmxHttp;
pub use retry::{RetryConfig, RetryPolicy};
