//! Repository Layer - Core Traits
//!
//! Abstract key-value storage the item repository persists through.
//! Implementations: browser `localStorage` (UI crate), in-memory.

use crate::error::StorageResult;

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
