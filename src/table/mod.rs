//! Entity table: attribute values and the loaded dataset.
//!
//! ## Key Types
//!
//! - `AttributeValue`: One cell of source data
//! - `Entity`: One species row with its display name
//! - `EntityTable`: Ordered, read-only collection of entities

pub mod attributes;
pub mod entity_table;

pub use attributes::{AttributeValue, GroupKey};
pub use entity_table::{Entity, EntityTable, Record};
