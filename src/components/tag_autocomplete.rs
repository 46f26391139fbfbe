//! Tag Autocomplete Component
//!
//! Comma-separated tag input with fuzzy suggestions for the segment being
//! typed, plus a chip picker listing every known tag.

use leptos::prelude::*;
use shopping_core::domain::parse_tags;
use shopping_core::filter::replace_current_segment;
use shopping_core::suggest_tags;

/// Append `tag` to comma-separated text unless it is already there
fn append_tag(input: &str, tag: &str) -> String {
    let mut tags = parse_tags(input);
    if !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
    tags.join(", ")
}

/// Tag input with suggestions and chip picker
///
/// Props:
/// - value: the comma-separated tag text, owned by the parent form
/// - all_tags: every tag currently in use, for suggestions and chips
#[component]
pub fn TagAutocomplete(
    value: RwSignal<String>,
    #[prop(into)] all_tags: Signal<Vec<String>>,
) -> impl IntoView {
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = move || all_tags.with(|tags| value.with(|input| suggest_tags(input, tags)));

    // Replaces only the segment after the last comma
    let accept = move |name: String| {
        value.update(|input| *input = replace_current_segment(input, &name));
        set_selected_idx.set(0);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        if sugg.is_empty() {
            return;
        }
        let sel = selected_idx.get();
        match ev.key().as_str() {
            "Tab" => {
                ev.prevent_default();
                if let Some(name) = sugg.get(sel) {
                    accept(name.clone());
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="tag-input-wrapper">
            <input
                type="text"
                placeholder="Tags (comma separated)"
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    set_selected_idx.set(0);
                }
                on:keydown=on_keydown
            />

            // Suggestions for the current segment only
            {move || {
                let sugg = suggestions();
                let selected = selected_idx.get();
                (!sugg.is_empty()).then(|| view! {
                    <div class="autocomplete-list">
                        {sugg.into_iter().enumerate().map(|(i, name)| {
                            let name_for_click = name.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if i == selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        accept(name_for_click.clone());
                                    }
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                })
            }}

            // Chip picker
            <div class="tag-chips">
                {move || all_tags.get().into_iter().map(|tag| {
                    let tag_for_click = tag.clone();
                    let tag_for_class = tag.clone();
                    let is_entered = move || value.with(|input| parse_tags(input).contains(&tag_for_class));
                    view! {
                        <button
                            type="button"
                            class=move || if is_entered() { "tag-chip entered" } else { "tag-chip" }
                            on:click=move |_| value.update(|input| *input = append_tag(input, &tag_for_click))
                        >
                            {tag}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
