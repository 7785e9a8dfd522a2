//! Property system: value type, catalog, and extraction.
//!
//! ## Key Types
//!
//! - `Property`: Label plus member set
//! - `PropertyCatalog`: Every property derived from one table, labels unique
//! - `PropertyExtractor`: Default frequency rule plus special-column bucketing

pub mod extractor;
pub mod property;
mod special;

pub use extractor::{extract, PropertyExtractor};
pub use property::{Property, PropertyCatalog};
