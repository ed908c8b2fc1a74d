//! Network URL constants for the GMX data backends.

/// Default GMX REST API base URL (Arbitrum).
pub const DEFAULT_REST_URL: &str = "https://arbitrum-api.gmxinfra.io";

/// Default Subsquid GraphQL endpoint for GMX synthetics (Arbitrum).
pub const DEFAULT_SUBSQUID_URL: &str =
    "https://gmx.squids.live/gmx-synthetics-arbitrum:prod/api/graphql";
