//! The 3x3 puzzle grid.
//!
//! A `PuzzleGrid` pairs three column properties with three row properties
//! and stores every row x column intersection: the admissible answers for
//! that cell. Grids are built by the sampler and replaced wholesale on
//! restart.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GridError, GridResult};
use crate::properties::Property;

/// Rows and columns per grid.
pub const GRID_SIZE: usize = 3;

/// Validated puzzle grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleGrid {
    columns: [Property; GRID_SIZE],
    rows: [Property; GRID_SIZE],
    /// `intersections[r][c] = rows[r].members ∩ columns[c].members`
    intersections: [[OrdSet<EntityId>; GRID_SIZE]; GRID_SIZE],
}

impl PuzzleGrid {
    /// Build a grid, computing every intersection.
    #[must_use]
    pub fn new(columns: [Property; GRID_SIZE], rows: [Property; GRID_SIZE]) -> Self {
        let intersections =
            std::array::from_fn(|r| std::array::from_fn(|c| rows[r].intersection(&columns[c])));
        Self::from_parts(columns, rows, intersections)
    }

    /// Build a grid from intersections the caller already computed.
    pub(crate) fn from_parts(
        columns: [Property; GRID_SIZE],
        rows: [Property; GRID_SIZE],
        intersections: [[OrdSet<EntityId>; GRID_SIZE]; GRID_SIZE],
    ) -> Self {
        Self {
            columns,
            rows,
            intersections,
        }
    }

    /// Column properties, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Property; GRID_SIZE] {
        &self.columns
    }

    /// Row properties, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Property; GRID_SIZE] {
        &self.rows
    }

    /// Admissible answers for a cell.
    pub fn intersection(&self, row: usize, col: usize) -> GridResult<&OrdSet<EntityId>> {
        check_cell(row, col)?;
        Ok(&self.intersections[row][col])
    }

    /// Number of admissible answers per cell.
    #[must_use]
    pub fn intersection_sizes(&self) -> [[usize; GRID_SIZE]; GRID_SIZE] {
        std::array::from_fn(|r| std::array::from_fn(|c| self.intersections[r][c].len()))
    }

    /// Is `id` an admissible answer for the cell?
    pub fn admits(&self, row: usize, col: usize, id: EntityId) -> GridResult<bool> {
        Ok(self.intersection(row, col)?.contains(&id))
    }

    /// Column labels, left to right.
    #[must_use]
    pub fn column_labels(&self) -> [String; GRID_SIZE] {
        std::array::from_fn(|c| self.columns[c].label.clone())
    }

    /// Row labels, top to bottom.
    #[must_use]
    pub fn row_labels(&self) -> [String; GRID_SIZE] {
        std::array::from_fn(|r| self.rows[r].label.clone())
    }

    /// Does every cell have at least `threshold` answers, with no label
    /// shared between rows and columns?
    #[must_use]
    pub fn is_valid(&self, threshold: usize) -> bool {
        let disjoint = self
            .rows
            .iter()
            .all(|row| self.columns.iter().all(|col| col.label != row.label));
        disjoint
            && self
                .intersections
                .iter()
                .flatten()
                .all(|cell| cell.len() >= threshold)
    }
}

/// Validate cell coordinates.
pub fn check_cell(row: usize, col: usize) -> GridResult<()> {
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return Err(GridError::InvalidCell { row, col });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(label: &str, raw: &[u32]) -> Property {
        Property::new(label, raw.iter().copied().map(EntityId))
    }

    fn grid() -> PuzzleGrid {
        PuzzleGrid::new(
            [
                prop("C0", &[0, 1, 2, 3, 4, 5]),
                prop("C1", &[3, 4, 5, 6, 7, 8]),
                prop("C2", &[0, 2, 4, 6, 8]),
            ],
            [
                prop("R0", &[0, 2, 4, 5, 6, 8]),
                prop("R1", &[0, 1, 2, 3, 4, 5, 6, 7, 8]),
                prop("R2", &[4]),
            ],
        )
    }

    #[test]
    fn test_intersections_computed() {
        let grid = grid();

        let cell: Vec<_> = grid.intersection(0, 1).unwrap().iter().map(|id| id.raw()).collect();
        assert_eq!(cell, vec![4, 5, 6, 8]);
        assert_eq!(grid.intersection_sizes()[1], [6, 6, 5]);
        assert_eq!(grid.intersection_sizes()[2], [1, 1, 1]);
    }

    #[test]
    fn test_admits() {
        let grid = grid();
        assert_eq!(grid.admits(0, 0, EntityId(2)), Ok(true));
        assert_eq!(grid.admits(0, 0, EntityId(1)), Ok(false));
        assert_eq!(grid.admits(3, 0, EntityId(1)), Err(GridError::InvalidCell { row: 3, col: 0 }));
    }

    #[test]
    fn test_is_valid() {
        let grid = grid();
        assert!(grid.is_valid(1));
        assert!(!grid.is_valid(3));

        let shared_label = PuzzleGrid::new(
            [prop("A", &[0]), prop("B", &[0]), prop("C", &[0])],
            [prop("A", &[0]), prop("D", &[0]), prop("E", &[0])],
        );
        assert!(!shared_label.is_valid(1));
    }

    #[test]
    fn test_labels() {
        let grid = grid();
        assert_eq!(grid.column_labels(), ["C0", "C1", "C2"]);
        assert_eq!(grid.row_labels(), ["R0", "R1", "R2"]);
    }
}
