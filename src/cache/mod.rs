// Cache module for persisted profile statistics.
// A string key-value store plus the TTL-stamped entry format stored in it.

#![allow(dead_code)]

pub mod entry;
pub mod paths;
pub mod store;

pub use entry::{CacheEntry, STATS_TTL, cache_key, read_entry, write_entry};
pub use store::{FileStore, KeyValueStore, MemoryStore};
