//! Immutable board: the hidden atom layout and its special zones
//!
//! Built once per game. Everything the ray engine reads lives here; nothing
//! here changes after construction.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::grid::Coord;
use super::zones::{SpecialZones, Zone};
use crate::error::{GameError, GameResult};

/// Whether an atom has been located by a correct guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtomStatus {
    Remaining,
    Found,
}

/// Validated atom layout plus derived zones
#[derive(Debug, Clone)]
pub struct Board {
    /// Atoms in the order supplied by the caller
    atoms: Vec<Coord>,
    occupied: BTreeSet<Coord>,
    zones: SpecialZones,
}

impl Board {
    /// Validate the layout and classify its zones.
    ///
    /// Rejects atoms outside the interior and duplicate atoms.
    pub fn new(atoms: &[Coord]) -> GameResult<Self> {
        let mut occupied = BTreeSet::new();
        for &atom in atoms {
            if !atom.is_interior() {
                return Err(GameError::AtomOutsideInterior { at: atom });
            }
            if !occupied.insert(atom) {
                return Err(GameError::DuplicateAtom { at: atom });
            }
        }

        let zones = SpecialZones::classify(atoms);
        Ok(Self {
            atoms: atoms.to_vec(),
            occupied,
            zones,
        })
    }

    pub fn atoms(&self) -> &[Coord] {
        &self.atoms
    }

    #[inline]
    pub fn has_atom(&self, coord: Coord) -> bool {
        self.occupied.contains(&coord)
    }

    pub fn zones(&self) -> &SpecialZones {
        &self.zones
    }

    /// Zone at `coord`; meaningless for cells holding an atom
    pub fn zone_at(&self, coord: Coord) -> Zone<'_> {
        self.zones.zone_at(coord)
    }
}
