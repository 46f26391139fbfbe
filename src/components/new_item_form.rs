//! New Item Form Component
//!
//! Form for creating new items: name, target stock, stock on hand and tags.

use leptos::prelude::*;
use shopping_core::{Mutation, NewItem};

use crate::components::TagAutocomplete;
use crate::context::use_app_context;

const DEFAULT_TARGET: i64 = 1;
const DEFAULT_ON_HAND: i64 = 0;

/// Parse a number field, falling back when blank or not a number
fn parse_count(text: &str, fallback: i64) -> i64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map_or(fallback, |v| v.trunc() as i64)
}

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (target, set_target) = signal(DEFAULT_TARGET.to_string());
    let (on_hand, set_on_hand) = signal(DEFAULT_ON_HAND.to_string());
    let tags = RwSignal::new(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = NewItem {
            name: name.get_untracked(),
            target_stock: parse_count(&target.get_untracked(), DEFAULT_TARGET),
            stock_on_hand: parse_count(&on_hand.get_untracked(), DEFAULT_ON_HAND),
            tags: tags.get_untracked(),
        };
        if ctx.dispatch(Mutation::Add(input)) {
            set_name.set(String::new());
            set_target.set(DEFAULT_TARGET.to_string());
            set_on_hand.set(DEFAULT_ON_HAND.to_string());
            tags.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    aria-label="item name"
                    placeholder="Item name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <label class="count-field">
                    "Target"
                    <input
                        type="number"
                        min="1"
                        aria-label="target stock"
                        prop:value=move || target.get()
                        on:input=move |ev| set_target.set(event_target_value(&ev))
                    />
                </label>
                <label class="count-field">
                    "On hand"
                    <input
                        type="number"
                        min="0"
                        aria-label="stock on hand"
                        prop:value=move || on_hand.get()
                        on:input=move |ev| set_on_hand.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Add"</button>
            </div>

            <TagAutocomplete value=tags all_tags=Signal::derive(move || ctx.available_tags()) />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3", 1), 3);
        assert_eq!(parse_count(" 2.7 ", 1), 2);
        assert_eq!(parse_count("", 1), 1);
        assert_eq!(parse_count("abc", 0), 0);
        assert_eq!(parse_count("-4", 0), -4);
    }
}
