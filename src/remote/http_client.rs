//! HTTP transport abstraction for the remote loader
//!
//! The loader depends only on this narrow contract; the `reqwest`-backed
//! implementation is the single concrete transport.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// A completed HTTP exchange: status code plus raw body bytes
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code of the response
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

/// Transport-level failure: the exchange could not complete at all
#[derive(Debug, Error)]
#[error("http transport failure: {0}")]
pub struct HttpError(pub String);

/// Minimal HTTP GET contract consumed by [`RemoteFeedLoader`]
///
/// The returned future may complete on any thread; callers are responsible
/// for dispatching to an appropriate context if needed.
///
/// [`RemoteFeedLoader`]: crate::remote::RemoteFeedLoader
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetches the resource at `url`
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` for any completed exchange, regardless of status
    /// * `Err(HttpError)` if the exchange could not complete
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpError>;
}

/// [`HttpClient`] backed by a shared `reqwest` client
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a client with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates a client wrapping a pre-configured `reqwest` client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|err| HttpError(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| HttpError(err.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}
