//! UI Components
//!
//! Reusable Leptos components.

mod item_row;
mod item_list;
mod new_item_form;
mod tag_autocomplete;
mod tag_filter_bar;
mod list_toolbar;

pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use tag_autocomplete::TagAutocomplete;
pub use tag_filter_bar::TagFilterBar;
pub use list_toolbar::ListToolbar;
