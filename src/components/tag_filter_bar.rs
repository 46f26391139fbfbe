//! Tag Filter Bar Component
//!
//! One button per tag in use, plus an "All" button.

use leptos::prelude::*;
use shopping_core::TagFilter;

use crate::context::use_app_context;

#[component]
pub fn TagFilterBar() -> impl IntoView {
    let ctx = use_app_context();

    let is_all = move || ctx.tag_filter() == TagFilter::All;

    view! {
        <div class="tag-filter-bar">
            <button
                type="button"
                class=move || if is_all() { "tag-filter-btn active" } else { "tag-filter-btn" }
                on:click=move |_| ctx.set_tag_filter(TagFilter::All)
            >
                "All"
            </button>
            {move || ctx.available_tags().into_iter().map(|tag| {
                let filter = TagFilter::Tag(tag.clone());
                let filter_for_click = filter.clone();
                let is_selected = move || ctx.tag_filter() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "tag-filter-btn active" } else { "tag-filter-btn" }
                        on:click=move |_| ctx.set_tag_filter(filter_for_click.clone())
                    >
                        {tag}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
