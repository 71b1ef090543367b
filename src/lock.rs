// Locks

pub mod memory_lock;
pub mod null_lock;

pub use memory_lock::MemoryLock;
pub use null_lock::NullLock;
