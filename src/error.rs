//! Failure taxonomy for the fetch pipeline.
//!
//! A remote failure is always absorbed by the fallback chain; the only
//! failure that ever reaches a repository caller is the fallback's own,
//! wrapped in [`FetchError::Cache`]. Per-record validation drops are not
//! failures at all and never appear here.

use thiserror::Error;

use crate::cache::CacheError;
use crate::remote::RemoteError;

/// Terminal failure of a repository fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("remote fetch failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("offline fallback failed: {0}")]
    Cache(#[from] CacheError),
}
