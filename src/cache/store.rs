//! Persistent store contract for the feed cache
//!
//! The store owns the single cached snapshot; the orchestrator only ever
//! touches it through this interface and never keeps a copy between calls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::feed::FeedImage;

/// Errors reported by a persistent store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted snapshot could not be decoded
    #[error("cached snapshot could not be decoded: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Opaque failure reported by a store backend
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// What a retrieval found in the store
///
/// A failed retrieval is the `Err` arm of the surrounding `Result`, so
/// exactly one of empty / found / failure describes every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheState {
    /// No snapshot is persisted
    Empty,
    /// A snapshot exists, with the instant it was written
    Found {
        feed: Vec<FeedImage>,
        timestamp: DateTime<Utc>,
    },
}

/// Persistence abstraction holding at most one feed snapshot
///
/// Implementations must apply operations issued sequentially by one caller in
/// issuance order, even when work is queued on another execution context, and
/// repeated retrievals with no intervening write must yield equal results.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Reads the current snapshot, if any
    ///
    /// Read-only: must have no side effects beyond the I/O itself.
    async fn retrieve(&self) -> Result<CacheState, StoreError>;

    /// Replaces any existing snapshot with `feed` written at `timestamp`
    async fn insert(&self, feed: Vec<FeedImage>, timestamp: DateTime<Utc>)
        -> Result<(), StoreError>;

    /// Removes the snapshot; removing a non-existent snapshot is a success
    async fn delete(&self) -> Result<(), StoreError>;
}
