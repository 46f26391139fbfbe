//! Repository Layer
//!
//! Storage abstraction, schema migration and the item repository.

mod traits;
mod memory;
mod item_repo;
pub mod migration;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use item_repo::ItemRepository;
