//! Item Entity
//!
//! A shopping-list entry with stock counts, purchased flag and tags.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Stored shopping-list item (v2 record shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque unique identifier, never changes
    pub id: String,
    /// Display name, trimmed and non-empty
    pub name: String,
    /// Legacy v1 quantity, kept so older readers still see a sensible value
    pub quantity: u32,
    pub purchased: bool,
    /// Desired quantity on hand, at least 1
    pub target_stock: u32,
    /// Current quantity on hand
    pub stock_on_hand: u32,
    pub tags: Vec<String>,
    /// Epoch milliseconds
    pub created_at: i64,
}

/// Form input for a new item, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub target_stock: i64,
    pub stock_on_hand: i64,
    /// Comma-separated tag text as typed
    pub tags: String,
}

impl Item {
    /// Build an item from form input.
    ///
    /// Returns `None` when the name is blank after trimming.
    pub fn new(input: &NewItem) -> Option<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return None;
        }
        let target_stock = clamp_target(input.target_stock);
        Some(Self {
            id: new_id(),
            name: name.to_string(),
            quantity: target_stock,
            purchased: false,
            target_stock,
            stock_on_hand: clamp_on_hand(input.stock_on_hand),
            tags: parse_tags(&input.tags),
            created_at: chrono::Utc::now().timestamp_millis(),
        })
    }

    /// Item needs restocking when it holds less than its target
    pub fn needs_restock(&self) -> bool {
        self.stock_on_hand < self.target_stock
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Entity for Item {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Fresh random item id
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn clamp_target(value: i64) -> u32 {
    if value < 1 {
        1
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

pub(crate) fn clamp_on_hand(value: i64) -> u32 {
    if value < 0 {
        0
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

/// Split comma-separated tag text into normalized tags
pub fn parse_tags(text: &str) -> Vec<String> {
    normalize_tags(text.split(','))
}

/// Trim, drop empties and keep the first occurrence of each tag
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !result.iter().any(|t| t == tag) {
            result.push(tag.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, target: i64, on_hand: i64, tags: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            target_stock: target,
            stock_on_hand: on_hand,
            tags: tags.to_string(),
        }
    }

    #[test]
    fn test_item_creation() {
        let item = Item::new(&input("  Milk ", 2, 0, "dairy, fridge")).unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.target_stock, 2);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.stock_on_hand, 0);
        assert_eq!(item.tags, vec!["dairy", "fridge"]);
        assert!(!item.purchased);
        assert!(!item.id.is_empty());
        assert!(item.needs_restock());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Item::new(&input("   ", 1, 0, "")).is_none());
    }

    #[test]
    fn test_counts_clamped() {
        let item = Item::new(&input("Eggs", 0, -3, "")).unwrap();
        assert_eq!(item.target_stock, 1);
        assert_eq!(item.stock_on_hand, 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Item::new(&input("A", 1, 0, "")).unwrap();
        let b = Item::new(&input("A", 1, 0, "")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" a, b,,c , a,"), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let item = Item::new(&input("Tea", 3, 1, "")).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        for field in ["id", "name", "quantity", "purchased", "targetStock", "stockOnHand", "tags", "createdAt"] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
    }
}
