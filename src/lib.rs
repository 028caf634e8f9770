//! Black Box - a 10x10 deduction puzzle
//!
//! Core modules:
//! - `sim`: Deterministic ray simulation (grid geometry, special zones, ray engine, scoring)
//! - `game`: Player-facing facade (fire ray, guess atom, score, remaining atoms)
//! - `render`: Read-only board view for presentation shells
//! - `settings`: Data-driven scoring rules

pub mod error;
pub mod game;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{GameError, GameResult};
pub use game::Game;
pub use render::{BoardView, CellMarker};
pub use settings::Settings;
pub use sim::{Coord, Direction, RayOutcome, RayTrace};

/// Game configuration constants
pub mod consts {
    /// Board is GRID_SIZE x GRID_SIZE, border ring included
    pub const GRID_SIZE: u8 = 10;
    /// Index of the last row/column
    pub const LAST_INDEX: u8 = GRID_SIZE - 1;
    /// Number of interior cells (8x8)
    pub const INTERIOR_CELLS: usize = ((GRID_SIZE - 2) as usize) * ((GRID_SIZE - 2) as usize);

    /// Score at the start of a game
    pub const STARTING_SCORE: i32 = 25;
    /// Deducted for each wrong guess (once per coordinate)
    pub const MISS_PENALTY: i32 = 5;
    /// Deducted for each newly used entry/exit point
    pub const ENTRY_EXIT_PENALTY: i32 = 1;

    /// Upper bound on ray steps: one visit per (interior cell, heading) state
    pub const MAX_RAY_STEPS: usize = INTERIOR_CELLS * 4;
}
