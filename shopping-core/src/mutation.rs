//! Item Mutations
//!
//! Every user action is a `Mutation`. Applying one never edits the current
//! collection: it returns the next collection, or `None` when the action
//! has no effect (blank name, unknown id, nothing to change).

use crate::config::StoreConfig;
use crate::domain::{parse_tags, position_of, Item, NewItem};

/// The two confirmations "clear all" requires
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearAllConfirmation {
    /// Confirm dialog accepted
    pub confirmed: bool,
    /// Text typed into the prompt, `None` if the prompt was cancelled
    pub typed_phrase: Option<String>,
}

impl ClearAllConfirmation {
    pub fn is_satisfied(&self, phrase: &str) -> bool {
        self.confirmed && self.typed_phrase.as_deref().map(str::trim) == Some(phrase)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Prepend a new item
    Add(NewItem),
    TogglePurchased(String),
    Remove(String),
    /// Change on-hand stock by `delta`, flooring at zero
    AdjustStock { id: String, delta: i64 },
    Zero(String),
    FillToTarget(String),
    /// Replace tags from comma-separated text
    SetTags { id: String, tags: String },
    ClearPurchased,
    ClearAll(ClearAllConfirmation),
    /// Move item `from` to the index currently held by item `to`
    Reorder { from: String, to: String },
}

impl Mutation {
    /// Compute the next collection, `None` for a no-op
    pub fn apply(&self, items: &[Item], config: &StoreConfig) -> Option<Vec<Item>> {
        match self {
            Mutation::Add(input) => {
                let item = Item::new(input)?;
                let mut next = Vec::with_capacity(items.len() + 1);
                next.push(item);
                next.extend_from_slice(items);
                Some(next)
            }
            Mutation::TogglePurchased(id) => update_item(items, id, |item| Item {
                purchased: !item.purchased,
                ..item.clone()
            }),
            Mutation::Remove(id) => {
                position_of(items, id.as_str())?;
                Some(items.iter().filter(|i| i.id != *id).cloned().collect())
            }
            Mutation::AdjustStock { id, delta } => update_item(items, id, |item| {
                let next = (i64::from(item.stock_on_hand) + delta).clamp(0, i64::from(u32::MAX));
                Item {
                    stock_on_hand: next as u32,
                    ..item.clone()
                }
            }),
            Mutation::Zero(id) => update_item(items, id, |item| Item {
                stock_on_hand: 0,
                ..item.clone()
            }),
            Mutation::FillToTarget(id) => update_item(items, id, |item| Item {
                stock_on_hand: item.target_stock,
                ..item.clone()
            }),
            Mutation::SetTags { id, tags } => update_item(items, id, |item| Item {
                tags: parse_tags(tags),
                ..item.clone()
            }),
            Mutation::ClearPurchased => {
                if !items.iter().any(|i| i.purchased) {
                    return None;
                }
                Some(items.iter().filter(|i| !i.purchased).cloned().collect())
            }
            Mutation::ClearAll(confirmation) => {
                if !confirmation.is_satisfied(&config.clear_all_phrase) || items.is_empty() {
                    return None;
                }
                Some(Vec::new())
            }
            Mutation::Reorder { from, to } => reorder(items, from, to),
        }
    }
}

/// Replace the item with `id` by `f(item)`; `None` if missing or unchanged
fn update_item<F>(items: &[Item], id: &str, f: F) -> Option<Vec<Item>>
where
    F: FnOnce(&Item) -> Item,
{
    let index = position_of(items, id)?;
    let updated = f(&items[index]);
    if updated == items[index] {
        return None;
    }
    let mut next = items.to_vec();
    next[index] = updated;
    Some(next)
}

fn reorder(items: &[Item], from: &str, to: &str) -> Option<Vec<Item>> {
    if from == to {
        return None;
    }
    let from_index = position_of(items, from)?;
    let to_index = position_of(items, to)?;
    let mut next = items.to_vec();
    let moved = next.remove(from_index);
    next.insert(to_index, moved);
    Some(next)
}
