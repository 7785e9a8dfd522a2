//! Session tracking and the engine facade.
//!
//! - `SessionState`: Cell answers, used answers, attempts for one grid
//! - `GuessOutcome`: Result of a guess
//! - `Game`: Table + catalog + RNG + session, driven by display names

pub mod game;
pub mod state;

pub use game::{Game, GridView};
pub use state::{GuessOutcome, SessionState};
