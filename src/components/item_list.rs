//! Item List Component
//!
//! Displays the filtered items with drag-to-reorder support.
//! Dropping a row onto another moves it to that row's position.

use leptos::prelude::*;
use leptos_dragdrop::*;
use shopping_core::Mutation;

use crate::components::ItemRow;
use crate::context::use_app_context;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();

    let dnd = create_dnd_signals::<String>();

    bind_global_mouseup(dnd, move |dragged_id: String, target_id: String| {
        log::debug!("[DND] Drop: dragged={}, target={}", dragged_id, target_id);
        ctx.dispatch(Mutation::Reorder {
            from: dragged_id,
            to: target_id,
        });
    });

    let visible = move || ctx.visible_items();

    view! {
        <div class="item-list">
            <Show when=move || !visible().is_empty() fallback=move || view! {
                <p class="empty-list">
                    {move || if ctx.show_all() { "Nothing on the list." } else { "Nothing needs restocking." }}
                </p>
            }>
                <For
                    each=visible
                    key=|item| {
                        // Every mutable field, so any change re-renders the row
                        (
                            item.id.clone(),
                            item.name.clone(),
                            item.purchased,
                            item.stock_on_hand,
                            item.target_stock,
                            item.tags.clone(),
                        )
                    }
                    children=move |item| {
                        let id = item.id.clone();
                        let on_mouseenter = make_on_row_mouseenter(dnd, id.clone());
                        let on_mouseleave = make_on_mouseleave(dnd);

                        let row_id = id.clone();
                        let item_class = move || {
                            let mut c = String::from("item-row-wrapper");
                            if dnd.is_dragging(&row_id) { c.push_str(" dragging"); }
                            if dnd.is_drop_target(&row_id) { c.push_str(" drop-target"); }
                            c
                        };

                        view! {
                            <div
                                class=item_class
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                            >
                                <ItemRow item=item dnd=dnd />
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
