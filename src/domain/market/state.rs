//! Market registry — the cached unified-symbol → market snapshot.
//!
//! The registry is the only shared mutable state in the SDK. Snapshots are
//! immutable `Arc`s replaced whole under a write lock, so a `resolve` racing
//! a `load` sees either the old snapshot or the new one, never a partial map.

use super::wire::TokensResponse;
use super::{convert, Market};
use crate::error::SdkError;

use async_lock::RwLock;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// Snapshot of all known markets, keyed by unified symbol.
pub type MarketMap = HashMap<String, Market>;

/// Process-local market cache with explicit reload discipline.
#[derive(Default)]
pub struct MarketRegistry {
    snapshot: RwLock<Option<Arc<MarketMap>>>,
}

impl MarketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the market map, fetching the token list via `fetch` on a cache
    /// miss or when `force_reload` is set.
    ///
    /// On fetch failure the previous snapshot (if any) is left intact.
    pub async fn load_with<F, Fut>(
        &self,
        force_reload: bool,
        fetch: F,
    ) -> Result<Arc<MarketMap>, SdkError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<TokensResponse, SdkError>>,
    {
        if !force_reload {
            if let Some(snap) = self.snapshot.read().await.as_ref() {
                return Ok(snap.clone());
            }
        }

        let tokens = fetch().await?;
        let map = Arc::new(convert::build_markets(tokens.tokens));
        tracing::debug!(markets = map.len(), "Loaded market registry snapshot");

        *self.snapshot.write().await = Some(map.clone());
        Ok(map)
    }

    /// Look up a market by unified symbol in the current snapshot.
    pub async fn resolve(&self, symbol: &str) -> Result<Market, SdkError> {
        let guard = self.snapshot.read().await;
        let snap = guard.as_ref().ok_or(SdkError::NotLoaded)?;

        snap.get(symbol).cloned().ok_or_else(|| {
            let mut known: Vec<String> = snap.keys().cloned().collect();
            known.sort();
            SdkError::MarketNotFound {
                symbol: symbol.to_string(),
                known,
            }
        })
    }

    /// Whether a snapshot has ever been loaded.
    pub async fn is_loaded(&self) -> bool {
        self.snapshot.read().await.is_some()
    }
}
