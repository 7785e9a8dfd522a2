//! Engine configuration.
//!
//! `EngineConfig` carries every constant the puzzle engine uses: which
//! columns identify a species, which columns get special bucketing, the
//! occurrence and overlap thresholds, and the sampler's restart budget.
//!
//! The defaults reproduce the microbes dataset layout:
//!
//! ```
//! use microbes_grid::core::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.identity_fields, ["Genus", "Species"]);
//! assert_eq!(config.min_occurrence, 5);
//! assert_eq!(config.threshold, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Cell shapes that count as "Sphere".
pub const SPHERE_SHAPES: [&str; 5] = [
    "Coccobacillus",
    "Diplococcus",
    "Staphylococcus",
    "Streptococcus",
    "Tetrad",
];

/// Cell shapes that count as "NOT Rod or Sphere".
pub const OTHER_SHAPES: [&str; 3] = ["Filamentous", "Pleomorphic", "Vibrio"];

/// Spiral shapes. Not bucketed unless `include_spiral_shapes` is set.
pub const SPIRAL_SHAPES: [&str; 2] = ["Spiral", "Spirillum"];

/// Puzzle engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fields joined with a space to form the display name, in order.
    /// Every record must carry all of them.
    pub identity_fields: Vec<String>,

    /// Extra columns never turned into properties.
    pub excluded_columns: Vec<String>,

    /// Minimum group size for a default-rule property (default: 5).
    pub min_occurrence: usize,

    /// Minimum row/column intersection size (default: 3).
    pub threshold: usize,

    /// Column-draw restarts before the sampler gives up.
    pub max_restarts: u32,

    /// Column bucketed into Rod / Sphere / other shapes.
    pub shape_column: String,

    /// Column bucketed into < 40, 40-60, > 60.
    pub gc_column: String,

    /// Column split into "No" and everything else.
    pub binary_column: String,

    /// Put Spiral/Spirillum into the "NOT Rod or Sphere" bucket.
    pub include_spiral_shapes: bool,

    /// Only the exact value "Yes" is affirmative for `binary_column`.
    pub strict_binary: bool,

    /// Seed for the engine RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            identity_fields: vec!["Genus".to_string(), "Species".to_string()],
            excluded_columns: vec!["Domain".to_string()],
            min_occurrence: 5,
            threshold: 3,
            max_restarts: 10_000,
            shape_column: "Shape".to_string(),
            gc_column: "GC Content".to_string(),
            binary_column: "Pigment Production".to_string(),
            include_spiral_shapes: false,
            strict_binary: false,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the minimum group size for default-rule properties.
    #[must_use]
    pub fn with_min_occurrence(mut self, min: usize) -> Self {
        self.min_occurrence = min;
        self
    }

    /// Set the minimum intersection size.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the sampler restart budget.
    #[must_use]
    pub fn with_max_restarts(mut self, restarts: u32) -> Self {
        self.max_restarts = restarts;
        self
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Exclude an additional column from property derivation.
    #[must_use]
    pub fn exclude_column(mut self, column: impl Into<String>) -> Self {
        self.excluded_columns.push(column.into());
        self
    }

    /// Bucket spiral shapes as "NOT Rod or Sphere".
    #[must_use]
    pub fn with_spiral_shapes(mut self) -> Self {
        self.include_spiral_shapes = true;
        self
    }

    /// Treat only "Yes" as affirmative for the binary column.
    #[must_use]
    pub fn with_strict_binary(mut self) -> Self {
        self.strict_binary = true;
        self
    }

    /// Is this column skipped by property derivation?
    #[must_use]
    pub fn is_reserved(&self, column: &str) -> bool {
        self.identity_fields.iter().any(|f| f == column)
            || self.excluded_columns.iter().any(|c| c == column)
    }

    /// Shape values that fall into the "NOT Rod or Sphere" bucket.
    #[must_use]
    pub fn other_shapes(&self) -> Vec<&'static str> {
        let mut shapes = OTHER_SHAPES.to_vec();
        if self.include_spiral_shapes {
            shapes.extend(SPIRAL_SHAPES);
        }
        shapes
    }
}
