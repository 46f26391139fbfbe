//! Item Row Component
//!
//! A single item with its stock controls.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_handle_mousedown, DndSignals};
use shopping_core::{Item, Mutation};

use crate::context::use_app_context;

/// A single item row in the list
#[component]
pub fn ItemRow(item: Item, dnd: DndSignals<String>) -> impl IntoView {
    let ctx = use_app_context();

    let on_handle_mousedown = make_on_handle_mousedown(dnd, item.id.clone());
    let needs_restock = item.needs_restock();
    let purchased = item.purchased;
    let stock = format!("{}/{}", item.stock_on_hand, item.target_stock);

    let id = StoredValue::new(item.id.clone());

    view! {
        <div class=move || {
            let mut c = String::from("item-row");
            if purchased { c.push_str(" purchased"); }
            if needs_restock { c.push_str(" needs-restock"); }
            c
        }>
            <span class="drag-handle" title="Drag to reorder" on:mousedown=on_handle_mousedown>"⠿"</span>

            <input
                type="checkbox"
                prop:checked=purchased
                on:change=move |_| {
                    ctx.dispatch(Mutation::TogglePurchased(id.get_value()));
                }
            />

            <span class="item-text">{item.name}</span>
            <span class="item-stock">{stock}</span>

            <span class="item-tags">
                {item.tags.into_iter().map(|tag| view! { <span class="tag-chip small">{tag}</span> }).collect_view()}
            </span>

            <button class="stock-btn" title="One less" on:click=move |_| {
                ctx.dispatch(Mutation::AdjustStock { id: id.get_value(), delta: -1 });
            }>"−1"</button>
            <button class="stock-btn" title="One more" on:click=move |_| {
                ctx.dispatch(Mutation::AdjustStock { id: id.get_value(), delta: 1 });
            }>"+1"</button>
            <button class="stock-btn" title="None on hand" on:click=move |_| {
                ctx.dispatch(Mutation::Zero(id.get_value()));
            }>"0"</button>
            <button class="stock-btn" title="Fill to target" on:click=move |_| {
                ctx.dispatch(Mutation::FillToTarget(id.get_value()));
            }>"Fill"</button>

            <button class="delete-btn" title="Delete" on:click=move |_| {
                ctx.dispatch(Mutation::Remove(id.get_value()));
            }>"×"</button>
        </div>
    }
}
