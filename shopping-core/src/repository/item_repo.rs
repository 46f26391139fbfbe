//! Item Repository
//!
//! Loads and saves the whole item collection under one storage key.

use super::migration;
use super::traits::KeyValueStore;
use crate::config::StoreConfig;
use crate::domain::Item;
use crate::error::StorageResult;

/// Repository persisting items through a key-value store
pub struct ItemRepository<S> {
    store: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> ItemRepository<S> {
    pub fn new(store: S, config: StoreConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Load items, falling back to the legacy key.
    ///
    /// Never fails: absent, unreadable or malformed data loads as empty.
    pub fn load(&self) -> Vec<Item> {
        match self.read(&self.config.storage_key) {
            Some(raw) => migration::decode(&raw),
            None => match self.read(&self.config.legacy_storage_key) {
                Some(raw) => {
                    log::info!("[STORE] Migrating items from {}", self.config.legacy_storage_key);
                    migration::decode(&raw)
                }
                None => Vec::new(),
            },
        }
    }

    /// Write the full collection under the current key
    pub fn save(&self, items: &[Item]) -> StorageResult<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(&self.config.storage_key, &raw)?;
        log::debug!("[STORE] Saved {} items", items.len());
        Ok(())
    }

    /// Unreadable keys count as absent
    fn read(&self, key: &str) -> Option<String> {
        self.store.get(key).ok().flatten()
    }
}
