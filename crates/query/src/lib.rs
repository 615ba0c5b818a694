//! Keyed, TTL-aware query cache with in-flight deduplication.
//!
//! - [`QueryCache`]: serves fresh entries without a fetch, shares one
//!   in-flight fetch between concurrent callers for the same key, and keeps
//!   the last result (or error) with the time it was fetched.
//! - [`QueryState`]: the loading/error/data view of one entry.

pub mod cache;
pub mod state;

pub use cache::{QueryCache, DEFAULT_STALE_TIME};
pub use state::QueryState;
