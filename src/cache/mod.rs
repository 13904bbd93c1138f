//! Feed cache: persistence contract, staleness policy, and orchestration
//!
//! The cache holds at most one snapshot of the feed collection plus the
//! instant it was written. [`LocalFeedLoader`] coordinates reads, writes, and
//! validation against a [`FeedStore`], applying the seven-day staleness
//! policy from [`policy`]. [`JsonFeedStore`] is the file-backed store
//! implementation.

mod json_store;
mod local_loader;
pub mod policy;
mod store;

pub use json_store::JsonFeedStore;
pub use local_loader::LocalFeedLoader;
pub use store::{CacheState, FeedStore, StoreError};
