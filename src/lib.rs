//! Feedcache - client-side feed loading with a time-bounded local cache
//!
//! This crate loads a single feed collection either from a remote HTTP source
//! or from a locally persisted snapshot, and keeps the two coherent through a
//! fixed seven-day staleness policy. The cache orchestrator lives in
//! [`cache::LocalFeedLoader`]; the remote path in [`remote::RemoteFeedLoader`].

pub mod cache;
pub mod clock;
pub mod feed;
pub mod remote;
