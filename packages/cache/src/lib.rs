//! Client-side query cache.
//!
//! Fetched entities are stored under a [`QueryKey`] and served from memory
//! until a mutation marks them stale with [`QueryCache::invalidate`]; the next
//! read then refetches.

mod key;
pub use key::QueryKey;

mod memory;
pub use memory::QueryCache;
