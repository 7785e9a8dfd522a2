//! In-memory entity table.
//!
//! The `EntityTable` owns every loaded species row. Nothing else copies or
//! mutates entities; the extractor and sampler work with `EntityId`s and
//! borrow the table for lookups.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

use super::attributes::{AttributeValue, GroupKey};
use crate::core::{EngineConfig, EntityId, GridError, GridResult};

/// One source record: ordered (column, value) pairs.
pub type Record = Vec<(String, AttributeValue)>;

/// One loaded species row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Row identifier.
    pub id: EntityId,

    /// Display name, e.g. "Vibrio cholerae".
    pub name: String,

    /// Attribute values in source column order.
    pub attributes: Record,
}

impl Entity {
    /// Get an attribute value by column name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

/// Normalized, read-only view of the dataset.
///
/// ## Example
///
/// ```
/// use microbes_grid::core::EngineConfig;
/// use microbes_grid::table::EntityTable;
///
/// let rows = vec![
///     vec![("Genus".into(), "Vibrio".into()), ("Species".into(), "cholerae".into())],
///     vec![("Genus".into(), "Bacillus".into()), ("Species".into(), "subtilis".into())],
/// ];
/// let table = EntityTable::load(rows, &EngineConfig::default()).unwrap();
///
/// assert_eq!(table.all_ids(), vec!["Bacillus subtilis", "Vibrio cholerae"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EntityTable {
    entities: Vec<Entity>,
    /// Column names in order of first appearance.
    columns: Vec<String>,
    /// Display name -> rows carrying it. More than one row makes the name ambiguous.
    by_name: FxHashMap<String, SmallVec<[EntityId; 1]>>,
    /// Number of identity fields a display name splits into.
    name_tokens: usize,
}

impl EntityTable {
    /// Load records, deriving each display name from the configured identity fields.
    ///
    /// Fails with `MalformedRecord` if any record lacks an identity field
    /// or carries an empty value for it.
    pub fn load<I>(rows: I, config: &EngineConfig) -> GridResult<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut table = Self {
            name_tokens: config.identity_fields.len(),
            ..Self::default()
        };

        for (index, attributes) in rows.into_iter().enumerate() {
            let mut parts = Vec::with_capacity(config.identity_fields.len());
            for field in &config.identity_fields {
                let value = attributes
                    .iter()
                    .find(|(name, _)| name == field)
                    .map(|(_, value)| value)
                    .filter(|value| !value.is_missing())
                    .map(ToString::to_string)
                    .filter(|text| !text.trim().is_empty())
                    .ok_or_else(|| GridError::MalformedRecord {
                        index,
                        field: field.clone(),
                    })?;
                parts.push(value.trim().to_string());
            }

            for (column, _) in &attributes {
                if !table.columns.contains(column) {
                    table.columns.push(column.clone());
                }
            }

            let id = EntityId::new(index as u32);
            let name = normalize_name(&parts.join(" "));
            table.by_name.entry(name.clone()).or_default().push(id);
            table.entities.push(Entity { id, name, attributes });
        }

        tracing::debug!(
            entities = table.entities.len(),
            columns = table.columns.len(),
            "loaded entity table"
        );

        Ok(table)
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Column names in source order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Iterate over all entities in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Get an entity by ID.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Display name of an entity. Empty for IDs this table didn't issue.
    #[must_use]
    pub fn name(&self, id: EntityId) -> &str {
        self.get(id).map_or("", |e| e.name.as_str())
    }

    /// All display names, sorted ascending (case-sensitive).
    #[must_use]
    pub fn all_ids(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entities.iter().map(|e| e.name.clone()).collect();
        names.sort();
        names
    }

    /// Group entities by exact value of `column`, in ascending value order.
    ///
    /// Entities lacking the column or holding a missing value are left out.
    /// A group mixing integers and decimals reports its decimal form.
    #[must_use]
    pub fn attribute_values(&self, column: &str) -> Vec<(AttributeValue, Vec<EntityId>)> {
        let mut groups: BTreeMap<GroupKey, (AttributeValue, Vec<EntityId>)> = BTreeMap::new();

        for entity in &self.entities {
            let Some(value) = entity.get(column) else {
                continue;
            };
            let Some(key) = value.group_key() else {
                continue;
            };
            let group = groups.entry(key).or_insert_with(|| (value.clone(), Vec::new()));
            if matches!(value, AttributeValue::Float(_)) && !matches!(group.0, AttributeValue::Float(_)) {
                group.0 = value.clone();
            }
            group.1.push(entity.id);
        }

        groups.into_values().collect()
    }

    /// Resolve a display name, as listed by `all_ids`, to exactly one entity.
    ///
    /// Whitespace runs compare equal to a single space. Identity values that
    /// themselves contain spaces resolve fine.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<EntityId> {
        match self.by_name.get(&normalize_name(name)) {
            Some(ids) if ids.len() == 1 => Some(ids[0]),
            _ => None,
        }
    }

    /// Resolve a typed identifier to exactly one entity.
    ///
    /// Stricter than `resolve`: the name must also split into one
    /// whitespace-separated token per identity field.
    pub fn lookup(&self, name: &str) -> GridResult<EntityId> {
        if name.split_whitespace().count() != self.name_tokens {
            return Err(GridError::UnknownEntity { name: name.to_string() });
        }
        self.resolve(name)
            .ok_or_else(|| GridError::UnknownEntity { name: name.to_string() })
    }

    /// Ordered attributes for a display name, for detail views.
    pub fn entity_attributes(&self, name: &str) -> GridResult<&[(String, AttributeValue)]> {
        let id = self.lookup(name)?;
        self.get(id)
            .map(|e| e.attributes.as_slice())
            .ok_or_else(|| GridError::UnknownEntity { name: name.to_string() })
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
