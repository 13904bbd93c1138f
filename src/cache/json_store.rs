//! File-backed feed store persisting the snapshot as a JSON document
//!
//! Stores the whole snapshot in a single file whose path is passed in at
//! construction time, so tests and callers choose their own location; a
//! default XDG-compliant path is available via [`JsonFeedStore::default_path`].

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use super::{CacheState, FeedStore, StoreError};
use crate::feed::FeedImage;

/// On-disk wrapper pairing the feed with its write timestamp
#[derive(Debug, Serialize, Deserialize)]
struct CacheDocument {
    feed: Vec<FeedImage>,
    timestamp: DateTime<Utc>,
}

/// Feed store keeping the single snapshot in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFeedStore {
    path: PathBuf,
}

impl JsonFeedStore {
    /// Creates a store persisting to the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the XDG-compliant default snapshot path
    ///
    /// Resolves to `~/.cache/feedcache/feed.json` on Linux, or the platform
    /// equivalent. Returns `None` if no home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "feedcache")?;
        Some(project_dirs.cache_dir().join("feed.json"))
    }
}

#[async_trait]
impl FeedStore for JsonFeedStore {
    async fn retrieve(&self) -> Result<CacheState, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(CacheState::Empty),
            Err(err) => return Err(StoreError::Io(err)),
        };

        let document: CacheDocument = serde_json::from_slice(&bytes)?;
        Ok(CacheState::Found {
            feed: document.feed,
            timestamp: document.timestamp,
        })
    }

    async fn insert(
        &self,
        feed: Vec<FeedImage>,
        timestamp: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let document = CacheDocument { feed, timestamp };
        let json = serde_json::to_vec_pretty(&document)?;

        debug!(path = %self.path.display(), "writing feed snapshot");
        fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn delete(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}
