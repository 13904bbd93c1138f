//! Cache staleness policy
//!
//! A pure predicate deciding whether a persisted snapshot is still usable
//! given its write timestamp and the caller-supplied current time. The policy
//! reads no clock of its own and has no side effects.

use chrono::{DateTime, Days, Utc};

/// Maximum age of a snapshot, in calendar days
pub const MAX_CACHE_AGE_DAYS: u64 = 7;

/// Decides whether a snapshot written at `timestamp` is still valid at `now`
///
/// Expiry is `timestamp` plus [`MAX_CACHE_AGE_DAYS`] calendar days (calendar
/// addition, so daylight-saving and month edges shift consistently). The
/// snapshot is valid iff `now` is strictly before the expiry instant; a
/// snapshot exactly at the boundary is expired.
///
/// # Arguments
/// * `timestamp` - When the snapshot was written
/// * `now` - The reference current time
///
/// # Returns
/// * `true` if the snapshot may be served
/// * `false` if it is expired (or expiry is not representable)
pub fn is_valid(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match timestamp.checked_add_days(Days::new(MAX_CACHE_AGE_DAYS)) {
        Some(expiry) => now < expiry,
        None => false,
    }
}
