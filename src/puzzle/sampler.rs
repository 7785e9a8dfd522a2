//! Rejection sampling of puzzle grids.
//!
//! ## Algorithm
//!
//! 1. Draw three distinct catalog properties as columns.
//! 2. Shuffle the whole catalog into a candidate row order.
//! 3. Walk it, skipping the columns, and accept each property whose
//!    intersection with every column has at least `threshold` members.
//! 4. Stop at three rows and return the grid.
//! 5. If the walk runs out first, discard everything and redraw columns.
//!
//! Redraws are capped at `max_restarts`; past that the sampler fails with
//! `InsufficientData` instead of looping forever on sparse catalogs.

use im::OrdSet;
use smallvec::SmallVec;

use super::grid::{PuzzleGrid, GRID_SIZE};
use crate::core::{EngineConfig, EntityId, GridError, GridResult, PuzzleRng};
use crate::properties::PropertyCatalog;

type Intersections = [OrdSet<EntityId>; GRID_SIZE];

/// Samples grids from a property catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleSampler {
    /// Minimum intersection size per cell.
    pub threshold: usize,
    /// Column redraws before giving up.
    pub max_restarts: u32,
}

impl Default for PuzzleSampler {
    fn default() -> Self {
        Self {
            threshold: 3,
            max_restarts: 10_000,
        }
    }
}

impl PuzzleSampler {
    /// Create a sampler from engine configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            threshold: config.threshold,
            max_restarts: config.max_restarts,
        }
    }

    /// Set the minimum intersection size.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the restart budget.
    #[must_use]
    pub fn with_max_restarts(mut self, restarts: u32) -> Self {
        self.max_restarts = restarts;
        self
    }

    /// Sample a grid whose every cell meets the threshold.
    pub fn sample(&self, catalog: &PropertyCatalog, rng: &mut PuzzleRng) -> GridResult<PuzzleGrid> {
        let insufficient = |restarts| GridError::InsufficientData {
            restarts,
            catalog_size: catalog.len(),
        };

        if catalog.len() < 2 * GRID_SIZE {
            tracing::warn!(catalog_size = catalog.len(), "catalog too small for a grid");
            return Err(insufficient(0));
        }

        for restart in 0..=self.max_restarts {
            if let Some(grid) = self.attempt(catalog, rng) {
                tracing::info!(
                    restarts = restart,
                    columns = ?grid.column_labels(),
                    rows = ?grid.row_labels(),
                    "sampled puzzle grid"
                );
                return Ok(grid);
            }
            tracing::debug!(restart, "row walk exhausted, redrawing columns");
        }

        tracing::warn!(
            restarts = self.max_restarts,
            catalog_size = catalog.len(),
            "restart budget exhausted"
        );
        Err(insufficient(self.max_restarts))
    }

    /// One column draw plus one row walk.
    fn attempt(&self, catalog: &PropertyCatalog, rng: &mut PuzzleRng) -> Option<PuzzleGrid> {
        let picked = rng.sample_distinct(catalog.len(), GRID_SIZE);
        let col_indices: [usize; GRID_SIZE] = picked.try_into().ok()?;

        let mut order: Vec<usize> = (0..catalog.len()).collect();
        rng.shuffle(&mut order);

        let mut rows: SmallVec<[(usize, Intersections); GRID_SIZE]> = SmallVec::new();
        for candidate in order {
            // Labels are unique within a catalog, so index equality is label equality.
            if col_indices.contains(&candidate) {
                continue;
            }

            let row = &catalog[candidate];
            let cells: Intersections =
                std::array::from_fn(|c| row.intersection(&catalog[col_indices[c]]));
            if cells.iter().all(|cell| cell.len() >= self.threshold) {
                rows.push((candidate, cells));
                if rows.len() == GRID_SIZE {
                    break;
                }
            }
        }

        let rows = rows.into_inner().ok()?;
        let [(r0, i0), (r1, i1), (r2, i2)] = rows;

        let columns = col_indices.map(|i| catalog[i].clone());
        let row_props = [r0, r1, r2].map(|i| catalog[i].clone());
        Some(PuzzleGrid::from_parts(columns, row_props, [i0, i1, i2]))
    }
}

/// Sample a grid with the given threshold and the default restart budget.
pub fn sample(catalog: &PropertyCatalog, threshold: usize, rng: &mut PuzzleRng) -> GridResult<PuzzleGrid> {
    PuzzleSampler::default().with_threshold(threshold).sample(catalog, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Property;

    fn prop(label: &str, lo: u32, hi: u32) -> Property {
        Property::new(label, (lo..hi).map(EntityId))
    }

    /// Six properties all covering entities 0..10: any split works.
    fn dense_catalog() -> PropertyCatalog {
        PropertyCatalog::new((0..6).map(|i| prop(&format!("P{i}"), 0, 10)).collect()).unwrap()
    }

    #[test]
    fn test_sample_dense() {
        let catalog = dense_catalog();
        let mut rng = PuzzleRng::new(42);

        let grid = sample(&catalog, 3, &mut rng).unwrap();
        assert!(grid.is_valid(3));

        let mut labels: Vec<_> =
            grid.column_labels().into_iter().chain(grid.row_labels()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 6);
    }

    #[test]
    fn test_sample_deterministic_with_seed() {
        let catalog = dense_catalog();

        let grid1 = sample(&catalog, 3, &mut PuzzleRng::new(7)).unwrap();
        let grid2 = sample(&catalog, 3, &mut PuzzleRng::new(7)).unwrap();

        assert_eq!(grid1, grid2);
    }

    #[test]
    fn test_catalog_too_small() {
        let catalog =
            PropertyCatalog::new((0..5).map(|i| prop(&format!("P{i}"), 0, 10)).collect()).unwrap();

        let err = sample(&catalog, 3, &mut PuzzleRng::new(1)).unwrap_err();
        assert_eq!(err, GridError::InsufficientData { restarts: 0, catalog_size: 5 });
    }

    #[test]
    fn test_unsatisfiable_catalog_is_bounded() {
        // Pairwise disjoint: no intersection ever reaches the threshold.
        let catalog = PropertyCatalog::new(
            (0..8).map(|i| prop(&format!("P{i}"), i * 5, i * 5 + 5)).collect(),
        )
        .unwrap();

        let sampler = PuzzleSampler::default().with_max_restarts(25);
        let err = sampler.sample(&catalog, &mut PuzzleRng::new(3)).unwrap_err();
        assert_eq!(err, GridError::InsufficientData { restarts: 25, catalog_size: 8 });
    }

    #[test]
    fn test_only_viable_split_is_found() {
        // Columns must be the three "wide" properties; rows the three "narrow" ones.
        let mut props = vec![prop("W0", 0, 30), prop("W1", 0, 30), prop("W2", 0, 30)];
        props.push(prop("N0", 0, 3));
        props.push(prop("N1", 10, 13));
        props.push(prop("N2", 20, 23));
        let catalog = PropertyCatalog::new(props).unwrap();

        let grid = PuzzleSampler::default()
            .sample(&catalog, &mut PuzzleRng::new(99))
            .unwrap();

        let mut cols = grid.column_labels().to_vec();
        cols.sort();
        assert_eq!(cols, vec!["W0", "W1", "W2"]);
        assert_eq!(grid.intersection_sizes(), [[3; 3]; 3]);
    }
}
