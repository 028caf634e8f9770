//! Grid geometry for the 10x10 board
//!
//! The board is an 8x8 interior surrounded by a one-cell border ring:
//! - corners: the four ring corners, never legal entry points
//! - border entry cells: the 32 non-corner ring cells
//! - interior cells: rows/cols 1..=8, where atoms live and rays travel
//! - interior edge cells: interior cells touching the ring

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::LAST_INDEX;

/// A board cell as (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset, `None` if the result leaves the grid
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let shifted = Self::new(row, col);
        shifted.is_on_grid().then_some(shifted)
    }

    /// Neighbouring cell one step in `direction`
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.offset();
        self.offset(d_row, d_col)
    }

    #[inline]
    pub fn is_on_grid(self) -> bool {
        self.row <= LAST_INDEX && self.col <= LAST_INDEX
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        CellKind::of(self) == CellKind::Corner
    }

    /// Legal ray entry/exit point
    #[inline]
    pub fn is_border_entry(self) -> bool {
        CellKind::of(self) == CellKind::BorderEntry
    }

    #[inline]
    pub fn is_interior(self) -> bool {
        CellKind::of(self) == CellKind::Interior
    }

    /// Interior cell adjacent to the border ring
    pub fn is_interior_edge(self) -> bool {
        self.is_interior()
            && (self.row == 1 || self.row == LAST_INDEX - 1 || self.col == 1 || self.col == LAST_INDEX - 1)
    }
}

impl From<(u8, u8)> for Coord {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Classification of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Corner,
    BorderEntry,
    Interior,
    /// Outside the 10x10 board
    OffGrid,
}

impl CellKind {
    pub fn of(coord: Coord) -> Self {
        if !coord.is_on_grid() {
            return CellKind::OffGrid;
        }
        let row_on_ring = coord.row == 0 || coord.row == LAST_INDEX;
        let col_on_ring = coord.col == 0 || coord.col == LAST_INDEX;
        match (row_on_ring, col_on_ring) {
            (true, true) => CellKind::Corner,
            (true, false) | (false, true) => CellKind::BorderEntry,
            (false, false) => CellKind::Interior,
        }
    }
}

/// Heading of a ray. North is decreasing row, East is increasing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// (row, col) delta of one step
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Heading of the first step from a border entry cell, `None` for any other cell
    pub fn inward_from(entry: Coord) -> Option<Self> {
        if !entry.is_border_entry() {
            return None;
        }
        Some(if entry.row == 0 {
            Direction::South
        } else if entry.row == LAST_INDEX {
            Direction::North
        } else if entry.col == 0 {
            Direction::East
        } else {
            Direction::West
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// All 32 legal entry points, clockwise from the top-left
pub fn border_entries() -> Vec<Coord> {
    let inner = 1..LAST_INDEX;
    let top = inner.clone().map(|col| Coord::new(0, col));
    let right = inner.clone().map(|row| Coord::new(row, LAST_INDEX));
    let bottom = inner.clone().rev().map(|col| Coord::new(LAST_INDEX, col));
    let left = inner.rev().map(|row| Coord::new(row, 0));
    top.chain(right).chain(bottom).chain(left).collect()
}

/// Every cell on the board, row-major
pub fn all_cells() -> impl Iterator<Item = Coord> {
    (0..=LAST_INDEX).flat_map(|row| (0..=LAST_INDEX).map(move |col| Coord::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        for (row, col) in [(0, 0), (0, 9), (9, 0), (9, 9)] {
            let c = Coord::new(row, col);
            assert!(c.is_corner());
            assert!(!c.is_border_entry());
            assert!(!c.is_interior());
        }
    }

    #[test]
    fn test_every_cell_has_exactly_one_kind() {
        let mut corners = 0;
        let mut entries = 0;
        let mut interior = 0;
        for c in all_cells() {
            match CellKind::of(c) {
                CellKind::Corner => corners += 1,
                CellKind::BorderEntry => entries += 1,
                CellKind::Interior => interior += 1,
                CellKind::OffGrid => panic!("{c} classified off grid"),
            }
        }
        assert_eq!(corners, 4);
        assert_eq!(entries, 32);
        assert_eq!(interior, 64);
        assert_eq!(border_entries().len(), 32);
    }

    #[test]
    fn test_interior_edge_ring() {
        assert!(Coord::new(1, 1).is_interior_edge());
        assert!(Coord::new(1, 6).is_interior_edge());
        assert!(Coord::new(7, 8).is_interior_edge());
        assert!(!Coord::new(4, 4).is_interior_edge());
        // Border cells are not interior at all
        assert!(!Coord::new(0, 4).is_interior_edge());
        let ring = all_cells().filter(|c| c.is_interior_edge()).count();
        assert_eq!(ring, 28);
    }

    #[test]
    fn test_off_grid() {
        assert_eq!(CellKind::of(Coord::new(10, 3)), CellKind::OffGrid);
        assert_eq!(Coord::new(0, 3).step(Direction::North), None);
        assert_eq!(Coord::new(9, 9).offset(1, 0), None);
    }

    #[test]
    fn test_inward_headings() {
        assert_eq!(Direction::inward_from(Coord::new(0, 4)), Some(Direction::South));
        assert_eq!(Direction::inward_from(Coord::new(9, 4)), Some(Direction::North));
        assert_eq!(Direction::inward_from(Coord::new(4, 0)), Some(Direction::East));
        assert_eq!(Direction::inward_from(Coord::new(4, 9)), Some(Direction::West));
        assert_eq!(Direction::inward_from(Coord::new(0, 0)), None);
        assert_eq!(Direction::inward_from(Coord::new(4, 4)), None);
    }

    #[test]
    fn test_step_and_reverse() {
        let c = Coord::new(4, 4);
        for dir in Direction::ALL {
            let next = c.step(dir).unwrap();
            assert_eq!(next.step(dir.reverse()), Some(c));
        }
    }
}
