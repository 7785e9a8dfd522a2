//! Property value type and catalog.
//!
//! A `Property` names a subset of entities sharing a derived
//! characteristic ("Gram Stain:\nPositive", "Shape:\nSphere").
//! Properties are value objects: built once by the extractor, never mutated.
//!
//! Member sets use `im::OrdSet` so copying a property into a grid is O(1).

use im::OrdSet;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::core::{EntityId, GridError, GridResult};

/// A labeled set of entities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Two-line display label, e.g. "Gram Stain:\nPositive".
    pub label: String,

    /// Entities having this property.
    pub members: OrdSet<EntityId>,
}

impl Property {
    /// Create a property from a label and its members.
    pub fn new(label: impl Into<String>, members: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            label: label.into(),
            members: members.into_iter().collect(),
        }
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Does this property have no members?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Does this property contain the entity?
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.members.contains(&id)
    }

    /// Entities shared with another property.
    #[must_use]
    pub fn intersection(&self, other: &Property) -> OrdSet<EntityId> {
        self.members.clone().intersection(other.members.clone())
    }
}

/// Ordered collection of properties with unique labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
}

impl PropertyCatalog {
    /// Build a catalog, rejecting duplicate labels.
    pub fn new(properties: Vec<Property>) -> GridResult<Self> {
        let mut seen = FxHashSet::default();
        for property in &properties {
            if !seen.insert(property.label.as_str()) {
                return Err(GridError::DuplicateLabel {
                    label: property.label.clone(),
                });
            }
        }
        Ok(Self { properties })
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Get a property by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Property> {
        self.properties.get(index)
    }

    /// Find a property by label.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.label == label)
    }

    /// Iterate over properties in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    /// All labels in extraction order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.label.as_str()).collect()
    }
}

impl Index<usize> for PropertyCatalog {
    type Output = Property;

    fn index(&self, index: usize) -> &Self::Output {
        &self.properties[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<EntityId> {
        raw.iter().copied().map(EntityId).collect()
    }

    #[test]
    fn test_members_deduplicate() {
        let prop = Property::new("Shape:\nRod", ids(&[3, 1, 3, 2]));
        assert_eq!(prop.len(), 3);
        assert!(prop.contains(EntityId(1)));
        assert!(!prop.contains(EntityId(0)));
    }

    #[test]
    fn test_intersection() {
        let a = Property::new("A", ids(&[0, 1, 2, 3]));
        let b = Property::new("B", ids(&[2, 3, 4]));

        let shared: Vec<_> = a.intersection(&b).into_iter().collect();
        assert_eq!(shared, ids(&[2, 3]));
        // Operands are untouched.
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_catalog_rejects_duplicate_labels() {
        let err = PropertyCatalog::new(vec![
            Property::new("A", ids(&[0])),
            Property::new("B", ids(&[1])),
            Property::new("A", ids(&[2])),
        ])
        .unwrap_err();

        assert_eq!(err, GridError::DuplicateLabel { label: "A".into() });
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = PropertyCatalog::new(vec![
            Property::new("A", ids(&[0])),
            Property::new("B", ids(&[1, 2])),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.labels(), vec!["A", "B"]);
        assert_eq!(catalog.find("B").map(Property::len), Some(2));
        assert!(catalog.find("C").is_none());
        assert_eq!(catalog.get(0).map(|p| p.label.as_str()), Some("A"));
    }
}
