//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Zones computed once per layout, never mutated
//! - Stable iteration order (ordered sets, atom layout order)
//! - No rendering or platform dependencies

pub mod grid;
pub mod ledger;
pub mod ray;
pub mod state;
pub mod zones;

pub use grid::{CellKind, Coord, Direction, all_cells, border_entries};
pub use ledger::{Charge, ScoreLedger};
pub use ray::{RayEvent, RayOutcome, RayTrace, trace};
pub use state::{AtomStatus, Board};
pub use zones::{Diagonal, SpecialZones, Zone};
