//! Property-based tests for grid and session invariants.

mod common;

use proptest::prelude::*;

use common::{microbe_rows, raw_members};
use microbes_grid::core::{EngineConfig, EntityId, PuzzleRng};
use microbes_grid::properties::extract;
use microbes_grid::puzzle::{PuzzleSampler, GRID_SIZE};
use microbes_grid::session::{GuessOutcome, SessionState};
use microbes_grid::table::EntityTable;

fn table() -> EntityTable {
    EntityTable::load(microbe_rows(30), &EngineConfig::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sampled_grids_meet_threshold(seed in any::<u64>()) {
        let config = EngineConfig::default();
        let table = table();
        let catalog = extract(&table, &config).unwrap();

        let grid = PuzzleSampler::from_config(&config)
            .sample(&catalog, &mut PuzzleRng::new(seed))
            .unwrap();

        prop_assert!(grid.is_valid(config.threshold));

        for row in grid.rows() {
            prop_assert!(grid.columns().iter().all(|col| col.label != row.label));
        }

        let rows = microbe_rows(30);
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let cell = grid.intersection(r, c).unwrap();
                prop_assert!(cell.len() >= 3);

                let raw = raw_members(&rows, &grid.rows()[r].label)
                    .intersection(&raw_members(&rows, &grid.columns()[c].label))
                    .count();
                prop_assert_eq!(cell.len(), raw);
            }
        }
    }

    #[test]
    fn used_answers_track_filled_cells(
        guesses in proptest::collection::vec((0..GRID_SIZE, 0..GRID_SIZE, 0u32..30), 0..60),
        seed in any::<u64>(),
    ) {
        let config = EngineConfig::default();
        let catalog = extract(&table(), &config).unwrap();
        let grid = PuzzleSampler::from_config(&config)
            .sample(&catalog, &mut PuzzleRng::new(seed))
            .unwrap();
        let mut session = SessionState::new(grid);

        let mut expected_attempts = 0;
        for (row, col, raw) in guesses {
            let id = EntityId(raw);
            let was_filled = session.answer(row, col).unwrap().is_some();
            let was_used = session.is_used(id);

            let outcome = session.submit_guess(row, col, id).unwrap();
            if was_filled {
                prop_assert_eq!(outcome, GuessOutcome::CellFilled);
            } else {
                expected_attempts += 1;
                if was_used {
                    prop_assert_eq!(outcome, GuessOutcome::RejectedAlreadyUsed);
                }
            }

            let placed: Vec<EntityId> = session.answers().iter().flatten().flatten().copied().collect();
            prop_assert_eq!(placed.len(), session.filled());
            prop_assert!(placed.iter().all(|id| session.is_used(*id)));
            prop_assert_eq!(session.is_won(), placed.len() == GRID_SIZE * GRID_SIZE);
        }

        prop_assert_eq!(session.attempts(), expected_attempts);
    }
}
