//! Score bookkeeping
//!
//! The ledger owns its own "seen" sets, so callers may charge the same
//! entry/exit point or record the same guess any number of times.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::grid::Coord;
use crate::settings::Settings;

/// Reason for a score deduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    /// Wrong atom guess
    Miss,
    /// Border point used by a ray
    EntryExit(Coord),
}

/// Score, charged entry/exit points and previous guesses for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreLedger {
    score: i32,
    miss_penalty: i32,
    entry_exit_penalty: i32,
    charged: BTreeSet<Coord>,
    guessed: BTreeSet<Coord>,
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl ScoreLedger {
    pub fn new(settings: &Settings) -> Self {
        Self {
            score: settings.starting_score,
            miss_penalty: settings.miss_penalty,
            entry_exit_penalty: settings.entry_exit_penalty,
            charged: BTreeSet::new(),
            guessed: BTreeSet::new(),
        }
    }

    /// Apply a charge, returning the points actually deducted
    pub fn charge(&mut self, charge: Charge) -> i32 {
        let deducted = match charge {
            Charge::Miss => self.miss_penalty,
            Charge::EntryExit(point) => {
                if !self.charged.insert(point) {
                    return 0;
                }
                self.entry_exit_penalty
            }
        };
        self.score -= deducted;
        log::debug!("Charged {charge:?}: -{deducted}, score now {}", self.score);
        deducted
    }

    /// Remember a guess; true if this coordinate was guessed before
    pub fn record_guess(&mut self, coord: Coord) -> bool {
        !self.guessed.insert(coord)
    }

    /// Current score, never clamped
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn entry_exit_points(&self) -> impl Iterator<Item = Coord> + '_ {
        self.charged.iter().copied()
    }

    pub fn guesses(&self) -> impl Iterator<Item = Coord> + '_ {
        self.guessed.iter().copied()
    }
}
