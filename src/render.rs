//! Read-only board rendering for presentation shells
//!
//! A `BoardView` is a snapshot: it owns its cells and never feeds back into
//! the game.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::GRID_SIZE;
use crate::sim::{AtomStatus, CellKind, Coord};

const SIZE: usize = GRID_SIZE as usize;

/// What a single board cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMarker {
    Corner,
    Entry,
    Empty,
    /// Unfound atom, only shown when revealing
    Atom,
    FoundAtom,
}

impl CellMarker {
    pub fn symbol(self) -> char {
        match self {
            CellMarker::Corner => 'X',
            CellMarker::Entry => '*',
            CellMarker::Empty => '.',
            CellMarker::Atom => 'A',
            CellMarker::FoundAtom => 'F',
        }
    }
}

/// 10x10 snapshot of the board, indexed [row][col]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    cells: [[CellMarker; SIZE]; SIZE],
}

impl BoardView {
    /// Build a view from atom statuses; unfound atoms show only with `reveal`
    pub fn new<'a>(atoms: impl IntoIterator<Item = (&'a Coord, &'a AtomStatus)>, reveal: bool) -> Self {
        let mut cells = [[CellMarker::Empty; SIZE]; SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = match CellKind::of(Coord::new(r as u8, c as u8)) {
                    CellKind::Corner => CellMarker::Corner,
                    CellKind::BorderEntry => CellMarker::Entry,
                    CellKind::Interior | CellKind::OffGrid => CellMarker::Empty,
                };
            }
        }

        for (atom, status) in atoms {
            let marker = match status {
                AtomStatus::Found => CellMarker::FoundAtom,
                AtomStatus::Remaining if reveal => CellMarker::Atom,
                AtomStatus::Remaining => continue,
            };
            cells[atom.row as usize][atom.col as usize] = marker;
        }

        Self { cells }
    }

    pub fn marker(&self, coord: Coord) -> Option<CellMarker> {
        self.cells
            .get(coord.row as usize)
            .and_then(|row| row.get(coord.col as usize))
            .copied()
    }

    pub fn rows(&self) -> &[[CellMarker; SIZE]; SIZE] {
        &self.cells
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{r} ")?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
