//! Key-value store backends for shortcuts.

pub mod memory;
pub mod redis;

pub use linkhop_core::repository::{ReadRepository, Repository, Result};
pub use linkhop_core::StorageError;
pub use memory::InMemoryRepository;
pub use self::redis::{RedisRepository, DEFAULT_KEY_PREFIX};
