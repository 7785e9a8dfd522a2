//! Property extraction.
//!
//! Walks every column of the table once, in source order:
//!
//! 1. Reserved columns (identity fields, explicit exclusions) are skipped.
//! 2. The shape, GC-content and binary columns get their fixed buckets.
//! 3. Every other column is grouped by exact value; each value shared by at
//!    least `min_occurrence` entities becomes a "<column>:\n<value>" property.
//!
//! Empty buckets are dropped, so every emitted property has members.
//! Extraction is deterministic for a given table and configuration.

use super::property::{Property, PropertyCatalog};
use super::special::{binary_properties, gc_content_properties, shape_properties};
use crate::core::{EngineConfig, GridResult};
use crate::table::EntityTable;

/// Derives the property catalog for a table.
#[derive(Clone, Debug)]
pub struct PropertyExtractor<'a> {
    config: &'a EngineConfig,
}

impl<'a> PropertyExtractor<'a> {
    /// Create an extractor using the given configuration.
    #[must_use]
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Extract every property from the table.
    ///
    /// Fails with `DuplicateLabel` if two columns produce the same label.
    pub fn extract(&self, table: &EntityTable) -> GridResult<PropertyCatalog> {
        let mut properties = Vec::new();

        for column in table.columns() {
            if self.config.is_reserved(column) {
                continue;
            }

            let derived = self.column_properties(table, column);
            for property in derived {
                if property.is_empty() {
                    tracing::debug!(label = %property.label, "dropping empty bucket");
                    continue;
                }
                properties.push(property);
            }
        }

        tracing::debug!(properties = properties.len(), "extracted property catalog");
        PropertyCatalog::new(properties)
    }

    fn column_properties(&self, table: &EntityTable, column: &str) -> Vec<Property> {
        let config = self.config;

        if column == config.shape_column {
            return shape_properties(table, config);
        }
        if column == config.gc_column {
            return gc_content_properties(table, config);
        }
        if column == config.binary_column {
            return binary_properties(table, config);
        }

        table
            .attribute_values(column)
            .into_iter()
            .filter(|(value, members)| {
                let keep = members.len() >= config.min_occurrence;
                if !keep {
                    tracing::trace!(column, %value, count = members.len(), "below min occurrence");
                }
                keep
            })
            .map(|(value, members)| Property::new(format!("{column}:\n{value}"), members))
            .collect()
    }
}

/// Extract the property catalog for a table.
pub fn extract(table: &EntityTable, config: &EngineConfig) -> GridResult<PropertyCatalog> {
    PropertyExtractor::new(config).extract(table)
}
