//! Shopping List App
//!
//! Main application component: form, filters, list and list controls.

use leptos::prelude::*;
use shopping_core::StoreConfig;

use crate::context::AppContext;
use crate::components::{ItemList, ListToolbar, NewItemForm, TagFilterBar};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::load(StoreConfig::default());

    // Provide context to all children
    provide_context(ctx);

    view! {
        <main class="app-layout">
            <h1>"Shopping List"</h1>

            <NewItemForm />

            <ListToolbar />

            <TagFilterBar />

            <ItemList />

            <p class="item-count">
                {move || format!("{} items, {} to restock, {} remaining", ctx.items().len(), ctx.restock_count(), ctx.remaining_count())}
            </p>
        </main>
    }
}
