//! Special-zone classification
//!
//! Derived once from an atom layout and never mutated. A cell belongs to at
//! most one zone; when several rules apply the priority is
//! atom > reflection > double deflection > deflection > open passage.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::grid::{Coord, Direction};
use crate::consts::LAST_INDEX;

/// Position of a deflection cell relative to the atom that causes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagonal {
    UpLeft,
    DownLeft,
    UpRight,
    DownRight,
}

impl Diagonal {
    pub const ALL: [Diagonal; 4] = [
        Diagonal::UpLeft,
        Diagonal::DownLeft,
        Diagonal::UpRight,
        Diagonal::DownRight,
    ];

    /// (row, col) delta from the atom to the cell
    pub fn offset(self) -> (i8, i8) {
        match self {
            Diagonal::UpLeft => (-1, -1),
            Diagonal::DownLeft => (1, -1),
            Diagonal::UpRight => (-1, 1),
            Diagonal::DownRight => (1, 1),
        }
    }

    /// Outgoing heading for a ray entering this cell with `incoming`.
    ///
    /// Only the two headings that approach the atom are defined; the ray
    /// engine reverses a ray heading away from the atom.
    pub fn turn(self, incoming: Direction) -> Option<Direction> {
        use Direction::*;
        match (self, incoming) {
            (Diagonal::UpLeft, South) => Some(West),
            (Diagonal::UpLeft, East) => Some(North),
            (Diagonal::DownLeft, North) => Some(West),
            (Diagonal::DownLeft, East) => Some(South),
            (Diagonal::UpRight, South) => Some(East),
            (Diagonal::UpRight, West) => Some(North),
            (Diagonal::DownRight, North) => Some(East),
            (Diagonal::DownRight, West) => Some(South),
            _ => None,
        }
    }
}

/// What a cell does to a ray passing through it (atoms excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone<'a> {
    /// Border entry cell that sends the ray straight back out
    Reflection,
    /// Reverses the ray
    DoubleDeflection,
    /// Turns the ray 90 degrees; diagonals listed in atom layout order
    Deflection(&'a [Diagonal]),
    Open,
}

/// Reflection, deflection and double-deflection cells for one atom layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialZones {
    reflection: BTreeSet<Coord>,
    double_deflection: BTreeSet<Coord>,
    deflection: BTreeMap<Coord, Vec<Diagonal>>,
}

impl SpecialZones {
    /// Build the zone sets for a validated layout (interior atoms, no duplicates)
    pub fn classify(atoms: &[Coord]) -> Self {
        let occupied: BTreeSet<Coord> = atoms.iter().copied().collect();

        let reflection = reflection_cells(atoms);
        let double_deflection: BTreeSet<Coord> = double_deflection_cells(atoms)
            .into_iter()
            .filter(|c| !occupied.contains(c))
            .collect();

        let mut deflection: BTreeMap<Coord, Vec<Diagonal>> = BTreeMap::new();
        for &atom in atoms {
            for diagonal in Diagonal::ALL {
                let (d_row, d_col) = diagonal.offset();
                let Some(cell) = atom.offset(d_row, d_col) else {
                    continue;
                };
                if !cell.is_interior() || occupied.contains(&cell) || double_deflection.contains(&cell) {
                    continue;
                }
                deflection.entry(cell).or_default().push(diagonal);
            }
        }

        Self {
            reflection,
            double_deflection,
            deflection,
        }
    }

    /// Zone of `coord`, resolved by priority
    pub fn zone_at(&self, coord: Coord) -> Zone<'_> {
        if self.reflection.contains(&coord) {
            Zone::Reflection
        } else if self.double_deflection.contains(&coord) {
            Zone::DoubleDeflection
        } else if let Some(diagonals) = self.deflection.get(&coord) {
            Zone::Deflection(diagonals)
        } else {
            Zone::Open
        }
    }

    pub fn is_reflection(&self, coord: Coord) -> bool {
        self.reflection.contains(&coord)
    }

    pub fn reflection_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.reflection.iter().copied()
    }

    pub fn double_deflection_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.double_deflection.iter().copied()
    }

    pub fn deflection_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.deflection.keys().copied()
    }
}

/// Border cells beside atoms sitting on the interior edge.
///
/// Each border side the atom touches contributes the two cells flanking its
/// projection; atoms in the interior corners touch two sides.
fn reflection_cells(atoms: &[Coord]) -> BTreeSet<Coord> {
    let mut cells = BTreeSet::new();
    for &atom in atoms.iter().filter(|a| a.is_interior_edge()) {
        let mut projections = Vec::with_capacity(2);
        if atom.row == 1 {
            projections.push(Coord::new(0, atom.col));
        }
        if atom.row == LAST_INDEX - 1 {
            projections.push(Coord::new(LAST_INDEX, atom.col));
        }
        if atom.col == 1 {
            projections.push(Coord::new(atom.row, 0));
        }
        if atom.col == LAST_INDEX - 1 {
            projections.push(Coord::new(atom.row, LAST_INDEX));
        }

        for projection in projections {
            // Flank along the border line, perpendicular to the atom's side
            let flanks = if projection.row == 0 || projection.row == LAST_INDEX {
                [projection.offset(0, -1), projection.offset(0, 1)]
            } else {
                [projection.offset(-1, 0), projection.offset(1, 0)]
            };
            cells.extend(flanks.into_iter().flatten().filter(|c| c.is_border_entry()));
        }
    }
    cells
}

/// Cells flanking the gap between two atoms two apart on a row or column
fn double_deflection_cells(atoms: &[Coord]) -> BTreeSet<Coord> {
    let mut cells = BTreeSet::new();
    for &a in atoms {
        for &b in atoms {
            let same_row = a.row == b.row && b.col == a.col + 2;
            let same_col = a.col == b.col && b.row == a.row + 2;
            let flanks = if same_row {
                [a.offset(-1, 1), a.offset(1, 1)]
            } else if same_col {
                [a.offset(1, -1), a.offset(1, 1)]
            } else {
                continue;
            };
            cells.extend(flanks.into_iter().flatten().filter(|c| c.is_interior()));
        }
    }
    cells
}
