//! Application Context
//!
//! The state container and repository, provided via Leptos Context API.
//! Components read state through it and change it only with `dispatch`.

use leptos::prelude::*;
use shopping_core::{filter, ClearAllConfirmation, Item, ItemRepository, Mutation, StoreConfig, TagFilter};

use crate::storage::BrowserStorage;
use crate::store::{store_replace_items, AppState, AppStateStoreFields, AppStore};

/// App-wide state handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    state: AppStore,
    repo: StoredValue<ItemRepository<BrowserStorage>>,
}

impl AppContext {
    /// Load persisted items and build the state container
    pub fn load(config: StoreConfig) -> Self {
        let repo = ItemRepository::new(BrowserStorage, config);
        let items = repo.load();
        log::info!("[APP] Loaded {} items", items.len());
        Self {
            state: AppStore::new(AppState::new(items)),
            repo: StoredValue::new(repo),
        }
    }

    /// Apply a mutation, persist the result and publish it.
    ///
    /// Returns false when the mutation had no effect.
    pub fn dispatch(&self, mutation: Mutation) -> bool {
        let next = self.repo.with_value(|repo| {
            self.state
                .items()
                .with_untracked(|items| mutation.apply(items, repo.config()))
        });
        let Some(next) = next else {
            log::debug!("[APP] No-op: {:?}", mutation);
            return false;
        };
        self.repo.with_value(|repo| {
            if let Err(e) = repo.save(&next) {
                log::warn!("[APP] Failed to persist items: {}", e);
            }
        });
        store_replace_items(&self.state, next);
        true
    }

    /// Ask for both confirmations, then clear everything
    pub fn clear_all(&self) -> bool {
        let phrase = self.clear_all_phrase();
        let Some(window) = web_sys::window() else {
            return false;
        };
        let confirmed = window
            .confirm_with_message("Delete every item on the list? This cannot be undone.")
            .unwrap_or(false);
        let typed_phrase = if confirmed {
            window
                .prompt_with_message(&format!("Type {} to confirm.", phrase))
                .ok()
                .flatten()
        } else {
            None
        };
        self.dispatch(Mutation::ClearAll(ClearAllConfirmation {
            confirmed,
            typed_phrase,
        }))
    }

    pub fn clear_all_phrase(&self) -> String {
        self.repo.with_value(|repo| repo.config().clear_all_phrase.clone())
    }

    pub fn items(&self) -> Vec<Item> {
        self.state.items().get()
    }

    /// Items passing the restock and tag filters
    pub fn visible_items(&self) -> Vec<Item> {
        let show_all = self.state.show_all().get();
        let tag_filter = self.state.tag_filter().get();
        self.state
            .items()
            .with(|items| filter::visible_items(items, show_all, &tag_filter))
    }

    pub fn available_tags(&self) -> Vec<String> {
        self.state.items().with(|items| filter::available_tags(items))
    }

    pub fn restock_count(&self) -> usize {
        self.state.items().with(|items| filter::restock_count(items))
    }

    pub fn remaining_count(&self) -> usize {
        self.state.items().with(|items| filter::remaining_count(items))
    }

    pub fn show_all(&self) -> bool {
        self.state.show_all().get()
    }

    pub fn set_show_all(&self, show_all: bool) {
        self.state.show_all().set(show_all);
    }

    pub fn tag_filter(&self) -> TagFilter {
        self.state.tag_filter().get()
    }

    pub fn set_tag_filter(&self, tag_filter: TagFilter) {
        self.state.tag_filter().set(tag_filter);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
