//! Player-facing game facade
//!
//! Owns the immutable board plus the mutable score ledger and atom status
//! table. One `Game` per session; nothing is shared between games.

use std::collections::BTreeMap;

use crate::error::{GameError, GameResult};
use crate::render::BoardView;
use crate::settings::Settings;
use crate::sim::{AtomStatus, Board, Charge, Coord, RayOutcome, RayTrace, ScoreLedger, trace};

/// A single game of Black Box
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    ledger: ScoreLedger,
    atoms: BTreeMap<Coord, AtomStatus>,
}

impl Game {
    /// New game with default scoring
    pub fn new(atoms: &[Coord]) -> GameResult<Self> {
        Self::with_settings(atoms, &Settings::default())
    }

    /// New game; fails fast on atoms outside the interior or duplicates
    pub fn with_settings(atoms: &[Coord], settings: &Settings) -> GameResult<Self> {
        let board = Board::new(atoms)?;
        let statuses = atoms.iter().map(|&a| (a, AtomStatus::Remaining)).collect();
        log::info!(
            "New game: {} atoms, starting score {}",
            atoms.len(),
            settings.starting_score
        );
        Ok(Self {
            board,
            ledger: ScoreLedger::new(settings),
            atoms: statuses,
        })
    }

    /// Fire a ray from (row, col).
    ///
    /// Corners, interior and off-grid cells give `Rejected` and change
    /// nothing. `Err` only reports an engine invariant violation.
    pub fn fire_ray(&mut self, row: u8, col: u8) -> GameResult<RayOutcome> {
        match self.trace_ray(row, col) {
            Ok(trace) => Ok(trace.outcome),
            Err(GameError::InvalidEntryPoint { .. }) => Ok(RayOutcome::Rejected),
            Err(e) => Err(e),
        }
    }

    /// Fire a ray and return its full trace; charges like `fire_ray`
    pub fn trace_ray(&mut self, row: u8, col: u8) -> GameResult<RayTrace> {
        let entry = Coord::new(row, col);
        let trace = trace(&self.board, entry).inspect_err(|e| {
            if e.is_internal() {
                log::error!("Ray engine failure: {e}");
            } else {
                log::warn!("Rejected ray: {e}");
            }
        })?;
        for point in trace.entry_exit_points() {
            self.ledger.charge(Charge::EntryExit(point));
        }
        Ok(trace)
    }

    /// Guess an atom at (row, col). Wrong guesses cost a miss once per cell.
    pub fn guess_atom(&mut self, row: u8, col: u8) -> bool {
        let guess = Coord::new(row, col);
        let repeated = self.ledger.record_guess(guess);

        if let Some(status) = self.atoms.get_mut(&guess) {
            if *status == AtomStatus::Remaining {
                *status = AtomStatus::Found;
                log::info!("Atom found at {guess}, {} remaining", self.remaining_atoms());
            }
            return true;
        }

        if !repeated {
            self.ledger.charge(Charge::Miss);
            log::info!("Missed guess at {guess}, score {}", self.ledger.score());
        }
        false
    }

    pub fn score(&self) -> i32 {
        self.ledger.score()
    }

    /// Atoms not yet found
    pub fn remaining_atoms(&self) -> usize {
        self.atoms
            .values()
            .filter(|&&s| s == AtomStatus::Remaining)
            .count()
    }

    pub fn is_solved(&self) -> bool {
        self.remaining_atoms() == 0
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Snapshot of the board; hidden atoms appear only with `reveal`
    pub fn board_view(&self, reveal: bool) -> BoardView {
        BoardView::new(&self.atoms, reveal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn game(atoms: &[(u8, u8)]) -> Game {
        let atoms: Vec<Coord> = atoms.iter().copied().map(Coord::from).collect();
        Game::new(&atoms).unwrap()
    }

    fn exited(row: u8, col: u8) -> RayOutcome {
        RayOutcome::Exited(Coord::new(row, col))
    }

    #[test]
    fn test_fire_ray_outcomes_and_score() {
        let mut g = game(&[(7, 1), (7, 3), (3, 6), (1, 6)]);
        assert_eq!(g.fire_ray(4, 9), Ok(exited(9, 7)));
        assert_eq!(g.score(), 23);
        assert_eq!(g.fire_ray(9, 4), Ok(exited(8, 9)));
        assert_eq!(g.fire_ray(0, 4), Ok(exited(6, 9)));
        assert_eq!(g.fire_ray(9, 5), Ok(exited(4, 0)));
        assert_eq!(g.score(), 17);
    }

    #[test]
    fn test_reused_points_charged_once() {
        let mut g = game(&[(7, 1), (7, 3), (3, 6), (1, 6)]);
        g.fire_ray(4, 9).unwrap();
        g.fire_ray(4, 9).unwrap();
        // (9,7) is already charged as the first ray's exit
        g.fire_ray(9, 7).unwrap();
        assert_eq!(g.score(), 23);
    }

    #[test]
    fn test_reflection_charges_single_point() {
        let mut g = game(&[(5, 2), (5, 4), (3, 6), (1, 6)]);
        assert_eq!(g.fire_ray(2, 9), Ok(exited(2, 9)));
        assert_eq!(g.fire_ray(9, 3), Ok(exited(9, 3)));
        assert_eq!(g.score(), 23);
    }

    #[test]
    fn test_absorbed_charges_entry() {
        let mut g = game(&[(8, 8), (1, 1), (1, 8)]);
        assert_eq!(g.fire_ray(1, 0), Ok(RayOutcome::Absorbed));
        assert_eq!(g.fire_ray(9, 1), Ok(RayOutcome::Absorbed));
        assert_eq!(g.score(), 23);
    }

    #[test]
    fn test_corners_and_interior_rejected() {
        let mut g = game(&[(3, 4), (4, 5), (8, 8), (7, 1), (7, 3), (3, 6), (1, 6)]);
        for (row, col) in [(9, 9), (0, 9), (0, 0), (9, 0), (4, 4), (12, 1)] {
            assert_eq!(g.fire_ray(row, col), Ok(RayOutcome::Rejected));
        }
        assert_eq!(g.score(), 25);
        assert_eq!(g.ledger().entry_exit_points().count(), 0);
    }

    #[test]
    fn test_guesses() {
        let mut g = game(&[(3, 4), (4, 5), (8, 8), (7, 1), (7, 3), (3, 6), (1, 6)]);
        assert!(g.guess_atom(4, 5));
        assert!(g.guess_atom(8, 8));
        assert_eq!(g.score(), 25);
        assert!(!g.guess_atom(9, 1));
        assert!(!g.guess_atom(1, 1));
        assert_eq!(g.score(), 15);
        assert!(!g.guess_atom(1, 1));
        assert_eq!(g.score(), 15);
        assert_eq!(g.remaining_atoms(), 5);
    }

    #[test]
    fn test_repeat_correct_guess_changes_nothing() {
        let mut g = game(&[(3, 4), (4, 5)]);
        assert!(g.guess_atom(3, 4));
        assert!(g.guess_atom(3, 4));
        assert_eq!(g.remaining_atoms(), 1);
        assert_eq!(g.score(), 25);
        assert!(g.guess_atom(4, 5));
        assert!(g.is_solved());
    }

    #[test]
    fn test_invalid_layouts() {
        let border = [Coord::new(0, 3)];
        assert_eq!(
            Game::new(&border).unwrap_err(),
            GameError::AtomOutsideInterior { at: Coord::new(0, 3) }
        );
        let dup = [Coord::new(2, 3), Coord::new(2, 3)];
        assert_eq!(
            Game::new(&dup).unwrap_err(),
            GameError::DuplicateAtom { at: Coord::new(2, 3) }
        );
    }

    #[test]
    fn test_adjacent_atoms_bounce_ray_back() {
        let mut g = game(&[(4, 4), (5, 4)]);
        assert_eq!(g.fire_ray(4, 0), Ok(exited(4, 0)));
        assert_eq!(g.score(), 24);
    }

    #[test]
    fn test_engine_errors_are_internal() {
        let stuck = GameError::RayDidNotTerminate {
            entry: Coord::new(0, 3),
            steps: 256,
        };
        assert!(stuck.is_internal());
        assert!(!GameError::InvalidEntryPoint { at: Coord::new(0, 0) }.is_internal());
    }

    #[test]
    fn test_trace_ray_and_board_view() {
        let mut g = game(&[(2, 5), (6, 5), (6, 7)]);
        let t = g.trace_ray(3, 0).unwrap();
        assert_eq!(t.outcome, exited(5, 0));
        assert_eq!(g.score(), 23);

        g.guess_atom(2, 5);
        let view = g.board_view(false);
        assert_eq!(view.marker(Coord::new(2, 5)), Some(crate::CellMarker::FoundAtom));
        assert_eq!(view.marker(Coord::new(6, 5)), Some(crate::CellMarker::Empty));
    }

    #[test]
    fn test_custom_settings() {
        let settings = Settings {
            starting_score: 5,
            miss_penalty: 5,
            entry_exit_penalty: 1,
        };
        let mut g = Game::with_settings(&[Coord::new(4, 4)], &settings).unwrap();
        g.guess_atom(1, 1);
        g.fire_ray(0, 1).unwrap();
        assert_eq!(g.score(), -2);
    }

    fn layout() -> impl Strategy<Value = Vec<Coord>> {
        prop::collection::btree_set((1u8..=8, 1u8..=8), 1..8)
            .prop_map(|cells| cells.into_iter().map(Coord::from).collect())
    }

    proptest! {
        #[test]
        fn prop_corners_always_rejected(atoms in layout()) {
            let mut g = Game::new(&atoms).unwrap();
            for (row, col) in [(0, 0), (0, 9), (9, 0), (9, 9)] {
                prop_assert_eq!(g.fire_ray(row, col), Ok(RayOutcome::Rejected));
            }
            prop_assert_eq!(g.score(), 25);
        }

        #[test]
        fn prop_every_border_shot_has_an_outcome(atoms in layout()) {
            let mut g = Game::new(&atoms).unwrap();
            for entry in crate::sim::border_entries() {
                let outcome = g.fire_ray(entry.row, entry.col);
                prop_assert!(
                    matches!(outcome, Ok(RayOutcome::Exited(_) | RayOutcome::Absorbed)),
                    "{:?}",
                    outcome
                );
            }
        }

        #[test]
        fn prop_refiring_never_costs_more(atoms in layout(), row in 1u8..=8) {
            let mut g = Game::new(&atoms).unwrap();
            prop_assert!(g.fire_ray(row, 0).is_ok());
            let after_first = g.score();
            prop_assert!(after_first == 24 || after_first == 23);
            prop_assert!(g.fire_ray(row, 0).is_ok());
            prop_assert_eq!(g.score(), after_first);
        }

        #[test]
        fn prop_wrong_guess_costs_once(atoms in layout(), row in 0u8..=9, col in 0u8..=9) {
            let mut g = Game::new(&atoms).unwrap();
            let cell = Coord::new(row, col);
            prop_assume!(!atoms.contains(&cell));
            prop_assert!(!g.guess_atom(row, col));
            prop_assert!(!g.guess_atom(row, col));
            prop_assert_eq!(g.score(), 20);
        }

        #[test]
        fn prop_remaining_drops_by_one_per_distinct_hit(atoms in layout()) {
            let mut g = Game::new(&atoms).unwrap();
            for (found, atom) in atoms.iter().enumerate() {
                prop_assert!(g.guess_atom(atom.row, atom.col));
                prop_assert!(g.guess_atom(atom.row, atom.col));
                prop_assert_eq!(g.remaining_atoms(), atoms.len() - found - 1);
            }
            prop_assert!(g.is_solved());
            prop_assert_eq!(g.score(), 25);
        }
    }
}
