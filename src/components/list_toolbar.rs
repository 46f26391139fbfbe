//! List Toolbar Component
//!
//! Show-all toggle and the bulk clear buttons.

use leptos::prelude::*;
use shopping_core::Mutation;

use crate::context::use_app_context;

#[component]
pub fn ListToolbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="list-toolbar">
            <label class="show-all-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || ctx.show_all()
                    on:change=move |ev| ctx.set_show_all(event_target_checked(&ev))
                />
                "Show all"
            </label>

            <span class="restock-count">{move || format!("{} to restock", ctx.restock_count())}</span>

            <button
                type="button"
                class="clear-purchased-btn"
                on:click=move |_| {
                    ctx.dispatch(Mutation::ClearPurchased);
                }
            >
                "Clear purchased"
            </button>
            <button
                type="button"
                class="clear-all-btn"
                title=move || format!("Asks twice, then type {}", ctx.clear_all_phrase())
                on:click=move |_| {
                    ctx.clear_all();
                }
            >
                "Clear all"
            </button>
        </div>
    }
}
