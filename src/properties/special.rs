//! Fixed bucketing for the special-cased columns.
//!
//! These replace the default frequency rule for their column entirely and
//! apply no minimum-occurrence filter. Buckets may come back empty; the
//! extractor decides what to keep.
//!
//! ## Known gaps
//!
//! - Shapes outside every vocabulary (Spiral, Spirillum by default) land in
//!   no bucket. `EngineConfig::include_spiral_shapes` folds the spiral
//!   vocabulary into "NOT Rod or Sphere".
//! - GC buckets always carry the "GC content" labels, whichever column
//!   `EngineConfig::gc_column` reads from.
//! - The binary column treats anything that is not exactly "No" as "Yes",
//!   missing cells included. `EngineConfig::strict_binary` narrows "Yes" to
//!   the exact value "Yes".

use super::property::Property;
use crate::core::{EngineConfig, EntityId, SPHERE_SHAPES};
use crate::table::{AttributeValue, Entity, EntityTable};

fn bucket<F>(table: &EntityTable, label: &str, mut predicate: F) -> Property
where
    F: FnMut(&Entity) -> bool,
{
    let members: Vec<EntityId> = table
        .iter()
        .filter(|entity| predicate(entity))
        .map(|entity| entity.id)
        .collect();
    Property::new(label, members)
}

fn text_of<'a>(entity: &'a Entity, column: &str) -> Option<&'a str> {
    entity.get(column).and_then(AttributeValue::as_text)
}

/// Rod / Sphere / NOT Rod or Sphere.
#[must_use]
pub(crate) fn shape_properties(table: &EntityTable, config: &EngineConfig) -> Vec<Property> {
    let column = config.shape_column.as_str();
    let other = config.other_shapes();

    vec![
        bucket(table, &format!("{column}:\nRod"), |e| text_of(e, column) == Some("Rod")),
        bucket(table, &format!("{column}:\nSphere"), |e| {
            text_of(e, column).is_some_and(|s| SPHERE_SHAPES.contains(&s))
        }),
        bucket(table, &format!("{column}:\nNOT Rod or Sphere"), |e| {
            text_of(e, column).is_some_and(|s| other.contains(&s))
        }),
    ]
}

/// GC content below 40, 40 through 60 inclusive, above 60.
///
/// Entities without a numeric value fall in no bucket.
#[must_use]
pub(crate) fn gc_content_properties(table: &EntityTable, config: &EngineConfig) -> Vec<Property> {
    let column = config.gc_column.as_str();
    let gc = |e: &Entity| e.get(column).and_then(AttributeValue::as_number);

    vec![
        bucket(table, "GC content\n< 40%", |e| gc(e).is_some_and(|v| v < 40.0)),
        bucket(table, "GC content:\n40-60%", |e| {
            gc(e).is_some_and(|v| (40.0..=60.0).contains(&v))
        }),
        bucket(table, "GC content\n> 60%", |e| gc(e).is_some_and(|v| v > 60.0)),
    ]
}

/// "No" versus everything else.
#[must_use]
pub(crate) fn binary_properties(table: &EntityTable, config: &EngineConfig) -> Vec<Property> {
    let column = config.binary_column.as_str();
    let strict = config.strict_binary;

    vec![
        bucket(table, &format!("{column}:\nNo"), |e| text_of(e, column) == Some("No")),
        bucket(table, &format!("{column}:\nYes"), |e| {
            if strict {
                text_of(e, column) == Some("Yes")
            } else {
                text_of(e, column) != Some("No")
            }
        }),
    ]
}
