//! Shopping List Core
//!
//! Item model, local-storage persistence with schema migration,
//! copy-on-write mutations and derived view filters.
//! Target independent: the browser storage backend lives in the UI crate.

pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod mutation;
pub mod repository;

pub use config::StoreConfig;
pub use domain::{Entity, Item, NewItem};
pub use error::{StorageError, StorageResult};
pub use filter::{available_tags, remaining_count, restock_count, suggest_tags, visible_items, TagFilter};
pub use mutation::{ClearAllConfirmation, Mutation};
pub use repository::{ItemRepository, KeyValueStore, MemoryStore};
