//! Domain Layer
//!
//! Contains the item entity and core abstractions.

mod entity;
mod item;

pub use entity::{position_of, Entity};
pub use item::{new_id, normalize_tags, parse_tags, Item, NewItem};
pub(crate) use item::{clamp_on_hand, clamp_target};
