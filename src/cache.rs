// Transient caches

pub mod cache_entry;
pub mod memory_cache;
pub mod null_cache;

pub use cache_entry::CacheEntry;
pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
