//! Cache orchestrator for the feed collection
//!
//! `LocalFeedLoader` coordinates save, load, and validation against a
//! [`FeedStore`], applying the staleness policy from [`policy`]. It keeps no
//! copy of the snapshot between calls; the store owns the data and the
//! orchestrator only sequences operations against it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{policy, CacheState, FeedStore, StoreError};
use crate::clock::Clock;
use crate::feed::{FeedError, FeedImage, FeedLoader};

/// Orchestrates cache reads, writes, and validation for the feed collection
///
/// All operations are `async fn`s driven by the caller; dropping a returned
/// future before completion cancels the in-flight store call and guarantees
/// no later step runs (a `save` cancelled during deletion never inserts).
pub struct LocalFeedLoader {
    store: Arc<dyn FeedStore>,
    clock: Arc<dyn Clock>,
}

impl LocalFeedLoader {
    /// Creates a loader over the given store and time source
    pub fn new(store: Arc<dyn FeedStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Replaces the cached snapshot with `feed`, timestamped at the current time
    ///
    /// Deletion runs first; insertion is only issued once deletion has
    /// completed successfully. A deletion failure is returned as-is and no
    /// insertion is attempted.
    ///
    /// # Arguments
    /// * `feed` - The records to persist
    ///
    /// # Returns
    /// * `Ok(())` if the snapshot was replaced
    /// * `Err(StoreError)` from whichever store operation failed
    pub async fn save(&self, feed: Vec<FeedImage>) -> Result<(), StoreError> {
        self.store.delete().await?;

        let timestamp = self.clock.now();
        debug!(records = feed.len(), %timestamp, "caching feed snapshot");
        self.store.insert(feed, timestamp).await
    }

    /// Loads the feed from the cache
    ///
    /// Read-only: never deletes, even when it finds an expired snapshot. An
    /// empty or expired cache is a successful load of an empty collection;
    /// only a retrieval failure is surfaced as an error. Use
    /// [`validate_cache`](Self::validate_cache) to purge invalid state.
    pub async fn load(&self) -> Result<Vec<FeedImage>, FeedError> {
        match self.store.retrieve().await? {
            CacheState::Empty => Ok(Vec::new()),
            CacheState::Found { feed, timestamp }
                if policy::is_valid(timestamp, self.clock.now()) =>
            {
                Ok(feed)
            }
            CacheState::Found { timestamp, .. } => {
                debug!(%timestamp, "cached snapshot expired, serving empty feed");
                Ok(Vec::new())
            }
        }
    }

    /// Purges the cache if it is unreadable or expired
    ///
    /// Fire-and-forget: failures have no result channel and are only
    /// observable through the deletion side effect. A healthy cache (empty or
    /// fresh) is left untouched.
    pub async fn validate_cache(&self) {
        let purge = match self.store.retrieve().await {
            Err(err) => {
                warn!(error = %err, "cache unreadable, purging");
                true
            }
            Ok(CacheState::Found { timestamp, .. })
                if !policy::is_valid(timestamp, self.clock.now()) =>
            {
                debug!(%timestamp, "cached snapshot expired, purging");
                true
            }
            Ok(_) => false,
        };

        if purge {
            if let Err(err) = self.store.delete().await {
                warn!(error = %err, "failed to purge invalid cache");
            }
        }
    }
}

#[async_trait]
impl FeedLoader for LocalFeedLoader {
    async fn load(&self) -> Result<Vec<FeedImage>, FeedError> {
        LocalFeedLoader::load(self).await
    }
}
