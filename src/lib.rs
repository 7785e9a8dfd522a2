//! # microbes-grid
//!
//! Puzzle engine for 3x3 "find the matching species" grids built from a
//! table of biological records.
//!
//! ## Design Principles
//!
//! 1. **Display-Agnostic**: No rendering, widgets or timing. A presentation
//!    layer consumes `GridView` and forwards guesses back in.
//!
//! 2. **Dataset-Agnostic**: Identity fields, special columns and thresholds
//!    come from `EngineConfig`, not from a global dataset.
//!
//! 3. **Reproducible**: Sampling draws from an explicit, seedable
//!    `PuzzleRng`, and the rejection loop is bounded.
//!
//! ## Pipeline
//!
//! `EntityTable` -> `PropertyExtractor` -> `PropertyCatalog` ->
//! `PuzzleSampler` -> `PuzzleGrid` -> `SessionState`
//!
//! ## Modules
//!
//! - `core`: Entity IDs, RNG, configuration, errors
//! - `table`: Attribute values and the entity table
//! - `properties`: Property type, catalog and extraction rules
//! - `puzzle`: Grid type and the rejection sampler
//! - `session`: Per-grid session state and the `Game` facade

pub mod core;
pub mod table;
pub mod properties;
pub mod puzzle;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineConfig, EntityId, GridError, GridResult, PuzzleRng};

pub use crate::table::{AttributeValue, Entity, EntityTable, Record};

pub use crate::properties::{extract, Property, PropertyCatalog, PropertyExtractor};

pub use crate::puzzle::{sample, PuzzleGrid, PuzzleSampler, GRID_SIZE};

pub use crate::session::{Game, GridView, GuessOutcome, SessionState};
