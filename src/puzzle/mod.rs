//! Puzzle grids and the sampler that builds them.

pub mod grid;
pub mod sampler;

pub use grid::{check_cell, PuzzleGrid, GRID_SIZE};
pub use sampler::{sample, PuzzleSampler};
