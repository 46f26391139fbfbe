//! View Filters
//!
//! Derived views over the item collection. Nothing here is stored.

use crate::domain::Item;

/// Maximum number of tag suggestions offered
const MAX_SUGGESTIONS: usize = 5;

/// Active tag filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    /// Sentinel: no tag filtering
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => item.has_tag(tag),
        }
    }
}

/// Items to render: restock-needed unless `show_all`, then by tag
pub fn visible_items(items: &[Item], show_all: bool, tag_filter: &TagFilter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| show_all || item.needs_restock())
        .filter(|item| tag_filter.matches(item))
        .cloned()
        .collect()
}

/// Union of all tags, first-seen order
pub fn available_tags(items: &[Item]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in items.iter().flat_map(|i| i.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

pub fn restock_count(items: &[Item]) -> usize {
    items.iter().filter(|i| i.needs_restock()).count()
}

/// Items not yet purchased
pub fn remaining_count(items: &[Item]) -> usize {
    items.iter().filter(|i| !i.purchased).count()
}

/// Simple fuzzy match: query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let target = target.to_lowercase();
    let mut target_chars = target.chars();
    query
        .to_lowercase()
        .chars()
        .all(|q| target_chars.by_ref().any(|c| c == q))
}

/// Text after the last comma, trimmed
pub fn current_segment(input: &str) -> &str {
    input.rsplit(',').next().unwrap_or("").trim()
}

/// Replace the text after the last comma with `tag`
pub fn replace_current_segment(input: &str, tag: &str) -> String {
    match input.rfind(',') {
        Some(pos) => format!("{}, {}", &input[..pos], tag),
        None => tag.to_string(),
    }
}

/// Suggestions for the segment being typed, excluding tags already entered
pub fn suggest_tags(input: &str, tags: &[String]) -> Vec<String> {
    let segment = current_segment(input);
    if segment.is_empty() {
        return Vec::new();
    }
    let entered: Vec<&str> = input.split(',').map(str::trim).collect();
    let entered = &entered[..entered.len().saturating_sub(1)];
    tags.iter()
        .filter(|tag| !entered.contains(&tag.as_str()))
        .filter(|tag| fuzzy_match(segment, tag))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
