//! Session state: one in-progress puzzle.
//!
//! Tracks which cells are filled, which entities have been placed, and how
//! many guesses were made. All mutation goes through `submit_guess` and
//! `restart`.
//!
//! ## Guess rules
//!
//! - Every guess at an empty cell counts as one attempt, accepted or not.
//! - An entity placed anywhere cannot be placed again.
//! - Guesses at a filled cell are ignored and do not count.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GridResult};
use crate::puzzle::{check_cell, PuzzleGrid, GRID_SIZE};

/// Result of a guess. Rejections are ordinary outcomes, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The entity was placed in the cell.
    Accepted,
    /// The entity does not have both the row and column property.
    RejectedNotInIntersection,
    /// The entity is already placed in another cell.
    RejectedAlreadyUsed,
    /// The cell was already filled; nothing changed.
    CellFilled,
}

/// Mutable state of one puzzle session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    grid: PuzzleGrid,
    cell_answers: [[Option<EntityId>; GRID_SIZE]; GRID_SIZE],
    /// Always equal to the non-empty entries of `cell_answers`.
    used_answers: FxHashSet<EntityId>,
    attempts: u32,
}

impl SessionState {
    /// Start a session on a fresh grid.
    #[must_use]
    pub fn new(grid: PuzzleGrid) -> Self {
        Self {
            grid,
            cell_answers: [[None; GRID_SIZE]; GRID_SIZE],
            used_answers: FxHashSet::default(),
            attempts: 0,
        }
    }

    /// The active grid, intersections included.
    #[must_use]
    pub fn grid(&self) -> &PuzzleGrid {
        &self.grid
    }

    /// Number of guesses counted so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Entity placed in a cell, if any.
    pub fn answer(&self, row: usize, col: usize) -> GridResult<Option<EntityId>> {
        check_cell(row, col)?;
        Ok(self.cell_answers[row][col])
    }

    /// All placed answers by cell.
    #[must_use]
    pub fn answers(&self) -> &[[Option<EntityId>; GRID_SIZE]; GRID_SIZE] {
        &self.cell_answers
    }

    /// Has this entity been placed anywhere?
    #[must_use]
    pub fn is_used(&self, id: EntityId) -> bool {
        self.used_answers.contains(&id)
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.used_answers.len()
    }

    /// Try to place `id` in a cell.
    ///
    /// Fails only for out-of-range coordinates.
    pub fn submit_guess(&mut self, row: usize, col: usize, id: EntityId) -> GridResult<GuessOutcome> {
        if !self.count_attempt(row, col)? {
            return Ok(GuessOutcome::CellFilled);
        }

        let outcome = if self.used_answers.contains(&id) {
            GuessOutcome::RejectedAlreadyUsed
        } else if !self.grid.admits(row, col, id)? {
            GuessOutcome::RejectedNotInIntersection
        } else {
            self.cell_answers[row][col] = Some(id);
            self.used_answers.insert(id);
            GuessOutcome::Accepted
        };

        tracing::debug!(row, col, entity = %id, ?outcome, attempts = self.attempts, "guess");
        Ok(outcome)
    }

    /// Record a guess naming no known entity.
    ///
    /// Counts like any other guess at an empty cell and is always rejected.
    pub fn submit_unknown(&mut self, row: usize, col: usize) -> GridResult<GuessOutcome> {
        if !self.count_attempt(row, col)? {
            return Ok(GuessOutcome::CellFilled);
        }

        tracing::debug!(row, col, attempts = self.attempts, "guess names no entity");
        Ok(GuessOutcome::RejectedNotInIntersection)
    }

    // False for a filled cell, which leaves the count alone.
    fn count_attempt(&mut self, row: usize, col: usize) -> GridResult<bool> {
        check_cell(row, col)?;
        if self.cell_answers[row][col].is_some() {
            return Ok(false);
        }
        self.attempts += 1;
        Ok(true)
    }

    /// True iff all nine cells are filled.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.cell_answers.iter().flatten().all(Option::is_some)
    }

    /// Replace the grid and clear all progress.
    pub fn restart(&mut self, grid: PuzzleGrid) {
        *self = Self::new(grid);
    }
}
