//! HTTP-backed feed loader
//!
//! Fetches the feed resource through an [`HttpClient`] and delegates payload
//! interpretation to the mapper. Transport failures surface as connectivity
//! errors; everything else about the exchange is judged by the mapper.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{mapper, HttpClient};
use crate::feed::{FeedError, FeedImage, FeedLoader};

/// Loads the feed collection from a remote resource URL
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
}

impl RemoteFeedLoader {
    /// Creates a loader for the feed at `url`, fetched through `client`
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self { url, client }
    }

    /// Fetches and decodes the remote feed
    ///
    /// # Returns
    /// * `Ok(Vec<FeedImage>)` - The decoded feed, possibly empty
    /// * `Err(FeedError::Connectivity)` - The request could not complete
    /// * `Err(FeedError::InvalidData)` - The response was not a valid feed
    pub async fn load(&self) -> Result<Vec<FeedImage>, FeedError> {
        debug!(url = %self.url, "fetching remote feed");

        let response = self
            .client
            .get(&self.url)
            .await
            .map_err(|err| FeedError::Connectivity(err.to_string()))?;

        mapper::map(&response.body, response.status)
    }
}

#[async_trait]
impl FeedLoader for RemoteFeedLoader {
    async fn load(&self) -> Result<Vec<FeedImage>, FeedError> {
        RemoteFeedLoader::load(self).await
    }
}
