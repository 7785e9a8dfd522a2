//! Entity identification.
//!
//! Every species row loaded into an `EntityTable` gets an `EntityId`.
//!
//! ## ID Layout
//!
//! IDs are the 0-based position of the record in the source data, so the
//! first loaded row is `EntityId(0)`. They are only meaningful relative to
//! the table that issued them; the display name ("Genus Species") is what
//! the presentation layer sees.
//!
//! ```
//! use microbes_grid::core::EntityId;
//!
//! let id = EntityId::new(3);
//! assert_eq!(id.index(), 3);
//! assert_eq!(format!("{}", id), "Entity(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one loaded entity (species row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw row index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of the entity in its table's row storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
