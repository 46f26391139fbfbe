//! Schema Migration
//!
//! Turns whatever JSON was found in storage into valid v2 items.
//! Each record goes through: detect version -> upgrade to v2 -> validate.

use serde_json::{Map, Value};

use crate::domain::{clamp_on_hand, clamp_target, new_id, normalize_tags, Item};

const UNTITLED: &str = "Untitled";

/// Fields that only exist on v2 records
const V2_FIELDS: &[&str] = &["targetStock", "stockOnHand", "tags"];

/// Persisted record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// id, name, quantity, purchased, createdAt
    V1,
    /// V1 plus targetStock, stockOnHand, tags
    V2,
}

/// A record carrying any v2-only field is v2
pub fn detect_version(record: &Map<String, Value>) -> SchemaVersion {
    if V2_FIELDS.iter().any(|f| record.contains_key(*f)) {
        SchemaVersion::V2
    } else {
        SchemaVersion::V1
    }
}

/// Decode a raw stored string. Anything unreadable yields no items.
pub fn decode(raw: &str) -> Vec<Item> {
    serde_json::from_str::<Value>(raw)
        .map(migrate_records)
        .unwrap_or_default()
}

/// Migrate a parsed JSON value; only arrays hold items
pub fn migrate_records(value: Value) -> Vec<Item> {
    let Value::Array(records) = value else {
        return Vec::new();
    };
    records.into_iter().filter_map(migrate_record).collect()
}

/// Migrate one record to a valid item; non-objects are dropped
pub fn migrate_record(value: Value) -> Option<Item> {
    let Value::Object(record) = value else {
        return None;
    };
    let record = match detect_version(&record) {
        SchemaVersion::V1 => upgrade_v1(record),
        SchemaVersion::V2 => record,
    };
    Some(validate(&record))
}

/// v1 -> v2: add the stock and tag fields with their defaults
fn upgrade_v1(mut record: Map<String, Value>) -> Map<String, Value> {
    record.insert("targetStock".to_string(), Value::from(1));
    record.insert("stockOnHand".to_string(), Value::from(0));
    record.insert("tags".to_string(), Value::Array(Vec::new()));
    record
}

/// Build an item from a v2-shaped record, coercing every field
fn validate(record: &Map<String, Value>) -> Item {
    let target_stock = coerce_int(record.get("targetStock"))
        .filter(|v| *v >= 1)
        .map_or(1, clamp_target);
    let stock_on_hand = coerce_int(record.get("stockOnHand"))
        .filter(|v| *v >= 0)
        .map_or(0, clamp_on_hand);
    let quantity = coerce_int(record.get("quantity"))
        .filter(|v| *v >= 1)
        .map_or(1, clamp_target);

    Item {
        id: coerce_id(record.get("id")),
        name: coerce_name(record.get("name")),
        quantity,
        purchased: record.get("purchased").and_then(Value::as_bool).unwrap_or(false),
        target_stock,
        stock_on_hand,
        tags: coerce_tags(record.get("tags")),
        created_at: coerce_int(record.get("createdAt")).unwrap_or(0),
    }
}

/// Numbers and numeric strings, truncated toward zero
fn coerce_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64),
        _ => None,
    }
}

fn coerce_id(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => new_id(),
    }
}

fn coerce_name(value: Option<&Value>) -> String {
    let name = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    if name.is_empty() {
        UNTITLED.to_string()
    } else {
        name
    }
}

fn coerce_tags(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(tags)) => normalize_tags(tags.iter().filter_map(Value::as_str)),
        _ => Vec::new(),
    }
}
