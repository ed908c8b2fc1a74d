//! Subsquid GraphQL layer — indexed historical GMX data.

pub mod client;

pub use client::SubsquidHttp;
