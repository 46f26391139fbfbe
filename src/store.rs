//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_core::{Item, TagFilter};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The whole collection, in display order
    pub items: Vec<Item>,
    /// Show every item instead of only those needing restock
    pub show_all: bool,
    /// Active tag filter
    pub tag_filter: TagFilter,
}

impl AppState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the collection wholesale.
///
/// Falls back to the "all" tag filter when no item carries the active tag anymore.
pub fn store_replace_items(store: &AppStore, items: Vec<Item>) {
    let keep_filter = match store.tag_filter().get_untracked() {
        TagFilter::All => true,
        TagFilter::Tag(tag) => items.iter().any(|item| item.has_tag(&tag)),
    };
    *store.items().write() = items;
    if !keep_filter {
        store.tag_filter().set(TagFilter::All);
    }
}
