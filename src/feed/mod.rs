//! Core feed model and loader contract
//!
//! This module contains the data types shared by the local cache and the
//! remote loading path: the feed record itself, the `FeedLoader` trait both
//! loaders implement, and the error taxonomy surfaced to callers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::cache::StoreError;

/// A single record in the feed collection
///
/// Immutable value type; equality is structural. Records are created by the
/// remote mapper or read back from the persistent store, never mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedImage {
    /// Unique identifier for the record
    pub id: Uuid,
    /// Optional caption text
    pub description: Option<String>,
    /// Optional location text
    pub location: Option<String>,
    /// Where the record's image can be fetched from
    pub image_url: Url,
}

/// Errors that can occur when loading the feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// The underlying transport could not complete the request
    #[error("connectivity failure: {0}")]
    Connectivity(String),

    /// The received bytes could not be interpreted as a feed payload
    #[error("invalid feed data: {0}")]
    InvalidData(String),

    /// The persistent store reported a failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Contract for anything that can produce the feed collection
///
/// Implemented by both the cache-backed [`LocalFeedLoader`](crate::cache::LocalFeedLoader)
/// and the HTTP-backed [`RemoteFeedLoader`](crate::remote::RemoteFeedLoader),
/// so composition code can swap or chain them behind one interface.
#[async_trait]
pub trait FeedLoader: Send + Sync {
    /// Loads the feed collection
    ///
    /// # Returns
    /// * `Ok(Vec<FeedImage>)` - The feed, possibly empty
    /// * `Err(FeedError)` - If the source could not produce a feed
    async fn load(&self) -> Result<Vec<FeedImage>, FeedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image(description: Option<&str>) -> FeedImage {
        FeedImage {
            id: Uuid::new_v4(),
            description: description.map(String::from),
            location: Some("Vancouver".to_string()),
            image_url: Url::parse("https://example.com/a.png").unwrap(),
        }
    }

    #[test]
    fn test_feed_image_equality_is_structural() {
        let a = sample_image(Some("sunset"));
        let b = FeedImage {
            id: a.id,
            description: a.description.clone(),
            location: a.location.clone(),
            image_url: a.image_url.clone(),
        };

        assert_eq!(a, b);

        let c = FeedImage {
            description: Some("sunrise".to_string()),
            ..b
        };
        assert_ne!(a, c);
    }

    #[test]
    fn test_feed_image_serialization_roundtrip() {
        let original = sample_image(None);

        let json = serde_json::to_string(&original).expect("Failed to serialize FeedImage");
        let decoded: FeedImage = serde_json::from_str(&json).expect("Failed to deserialize");

        assert_eq!(decoded, original);
        assert!(decoded.description.is_none());
    }

    #[test]
    fn test_feed_error_display_includes_cause() {
        let err = FeedError::Connectivity("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = FeedError::InvalidData("unexpected status 500".to_string());
        assert!(err.to_string().contains("unexpected status 500"));
    }
}
