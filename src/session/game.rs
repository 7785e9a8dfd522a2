//! Engine facade for the presentation layer.
//!
//! `Game` owns the entity table, the property catalog, the RNG and the
//! active session. A UI drives it entirely through display names and cell
//! coordinates; it never sees intersection membership.
//!
//! ```
//! use microbes_grid::core::EngineConfig;
//! use microbes_grid::session::{Game, GuessOutcome};
//! use microbes_grid::table::Record;
//!
//! let rows: Vec<Record> = (0..12)
//!     .map(|i| {
//!         let mut record: Record = vec![
//!             ("Genus".into(), format!("Genus{i}").into()),
//!             ("Species".into(), "sp".into()),
//!         ];
//!         for column in ["A", "B", "C", "D", "E", "F"] {
//!             record.push((column.into(), "yes".into()));
//!         }
//!         record
//!     })
//!     .collect();
//! let config = EngineConfig::default().with_seed(1).with_min_occurrence(1);
//! let mut game = Game::from_records(rows, config).unwrap();
//!
//! let view = game.grid_view();
//! assert!(view.cell_sizes.iter().flatten().all(|&n| n >= 3));
//! let outcome = game.submit_guess(0, 0, "Genus0 sp").unwrap();
//! assert_ne!(outcome, GuessOutcome::CellFilled);
//! assert_eq!(game.attempts(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::state::{GuessOutcome, SessionState};
use crate::core::{EngineConfig, GridResult, PuzzleRng};
use crate::properties::{PropertyCatalog, PropertyExtractor};
use crate::puzzle::{PuzzleSampler, GRID_SIZE};
use crate::table::{AttributeValue, EntityTable, Record};

/// What the presentation layer may show about the active grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    /// Column labels, left to right.
    pub column_labels: [String; GRID_SIZE],
    /// Row labels, top to bottom.
    pub row_labels: [String; GRID_SIZE],
    /// Number of admissible answers per cell.
    pub cell_sizes: [[usize; GRID_SIZE]; GRID_SIZE],
    /// Display names already placed, per cell.
    pub answers: [[Option<String>; GRID_SIZE]; GRID_SIZE],
}

/// A playable puzzle over one dataset.
#[derive(Clone, Debug)]
pub struct Game {
    config: EngineConfig,
    table: EntityTable,
    catalog: PropertyCatalog,
    sampler: PuzzleSampler,
    rng: PuzzleRng,
    session: SessionState,
}

impl Game {
    /// Extract properties from `table` and sample the first grid.
    pub fn new(table: EntityTable, config: EngineConfig) -> GridResult<Self> {
        let catalog = PropertyExtractor::new(&config).extract(&table)?;
        let sampler = PuzzleSampler::from_config(&config);
        let mut rng = config.seed.map_or_else(PuzzleRng::from_entropy, PuzzleRng::new);

        let grid = sampler.sample(&catalog, &mut rng)?;
        tracing::info!(
            entities = table.len(),
            properties = catalog.len(),
            seed = rng.seed(),
            "game ready"
        );

        Ok(Self {
            config,
            table,
            catalog,
            sampler,
            rng,
            session: SessionState::new(grid),
        })
    }

    /// Load records and start a game.
    pub fn from_records<I>(rows: I, config: EngineConfig) -> GridResult<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let table = EntityTable::load(rows, &config)?;
        Self::new(table, config)
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The loaded dataset.
    #[must_use]
    pub fn table(&self) -> &EntityTable {
        &self.table
    }

    /// Sorted display names for search/autocomplete.
    #[must_use]
    pub fn all_entity_ids(&self) -> Vec<String> {
        self.table.all_ids()
    }

    /// Ordered attributes for a display name.
    pub fn entity_attributes(&self, name: &str) -> GridResult<&[(String, AttributeValue)]> {
        self.table.entity_attributes(name)
    }

    /// Labels, cell sizes and placed answers. Never the answer sets.
    #[must_use]
    pub fn grid_view(&self) -> GridView {
        let grid = self.session.grid();
        let answers = self.session.answers();

        GridView {
            column_labels: grid.column_labels(),
            row_labels: grid.row_labels(),
            cell_sizes: grid.intersection_sizes(),
            answers: std::array::from_fn(|r| {
                std::array::from_fn(|c| answers[r][c].map(|id| self.table.name(id).to_string()))
            }),
        }
    }

    /// Guess an entity by display name, as listed by `all_entity_ids`.
    ///
    /// A name matching no single entity is counted and rejected like any
    /// other wrong answer. Fails only for out-of-range cells.
    pub fn submit_guess(&mut self, row: usize, col: usize, name: &str) -> GridResult<GuessOutcome> {
        match self.table.resolve(name) {
            Some(id) => self.session.submit_guess(row, col, id),
            None => self.session.submit_unknown(row, col),
        }
    }

    /// Are all nine cells filled?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.session.is_won()
    }

    /// Guesses counted in the active session.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.session.attempts()
    }

    /// Sample a new grid and reset the session.
    ///
    /// If sampling fails the current session is left untouched.
    pub fn restart(&mut self) -> GridResult<()> {
        let grid = self.sampler.sample(&self.catalog, &mut self.rng)?;
        self.session.restart(grid);
        tracing::info!("session restarted");
        Ok(())
    }
}
