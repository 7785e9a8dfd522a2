//! Core engine types: entity IDs, RNG, configuration, errors.
//!
//! Everything here is dataset-agnostic. Column names and thresholds arrive
//! through `EngineConfig` rather than being hardcoded in the extractor.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::EntityId;
pub use rng::PuzzleRng;
pub use config::{EngineConfig, OTHER_SHAPES, SPHERE_SHAPES, SPIRAL_SHAPES};
pub use error::{GridError, GridResult};
