//! Remote feed loading over HTTP
//!
//! [`RemoteFeedLoader`] fetches the feed from a resource URL through the
//! [`HttpClient`] abstraction and maps the payload into [`FeedImage`]s. Any
//! transport failure is normalized to a connectivity error; any payload that
//! is not a well-formed 200 feed response is invalid data.
//!
//! [`FeedImage`]: crate::feed::FeedImage

mod http_client;
mod loader;
mod mapper;

pub use http_client::{HttpClient, HttpError, HttpResponse, ReqwestHttpClient};
pub use loader::RemoteFeedLoader;
