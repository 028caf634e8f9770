//! Error types for game construction and ray tracing
//!
//! Only `InvalidEntryPoint` is an expected runtime condition; the facade turns
//! it into `RayOutcome::Rejected`. Layout errors are raised at construction,
//! and the remaining variants mean the ray engine walked off the grid or
//! failed to terminate.

use thiserror::Error;

use crate::sim::{Coord, Direction};

/// Result alias used across the crate
pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Ray fired from a corner, interior or off-grid cell
    #[error("{at} is not a border entry point")]
    InvalidEntryPoint { at: Coord },

    /// Atom placed on the border ring, a corner or off the grid
    #[error("atom at {at} is outside the 8x8 interior")]
    AtomOutsideInterior { at: Coord },

    /// Same cell listed twice in the atom layout
    #[error("atom at {at} is listed more than once")]
    DuplicateAtom { at: Coord },

    /// Orthogonal step from an interior cell fell off the grid
    #[error("ray left the grid stepping {heading} from {at}")]
    RayLeftGrid { at: Coord, heading: Direction },

    /// Step ceiling hit before the ray exited or was absorbed
    #[error("ray from {entry} did not terminate within {steps} steps")]
    RayDidNotTerminate { entry: Coord, steps: usize },
}

impl GameError {
    /// True for errors that can only come from an engine defect
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            GameError::RayLeftGrid { .. } | GameError::RayDidNotTerminate { .. }
        )
    }
}
