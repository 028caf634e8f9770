//! Ray engine
//!
//! Walks a ray from a border entry point through the board one cell at a
//! time. Each cell is evaluated in priority order:
//! 1. back on the border after leaving it -> exit
//! 2. atom -> absorbed
//! 3. reflection cell (entry only) -> exit where it entered
//! 4. double deflection -> reverse and step back
//! 5. deflection -> 90 degree turn, or reverse when heading away from the atom
//! 6. open -> straight on
//!
//! Every cell maps the four headings onto four distinct headings, so a ray
//! never revisits a (cell, heading) state. The walk is still an explicit loop
//! capped at `MAX_RAY_STEPS`.

use serde::{Deserialize, Serialize};

use super::grid::{Coord, Direction};
use super::state::Board;
use super::zones::Zone;
use crate::consts::MAX_RAY_STEPS;
use crate::error::{GameError, GameResult};

/// Terminal result of firing a ray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RayOutcome {
    /// Ray left the board at this border cell
    Exited(Coord),
    /// Ray ran into an atom
    Absorbed,
    /// Entry point was a corner, an interior cell or off the grid
    Rejected,
}

/// Notable things that happened to a ray, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RayEvent {
    Entered { at: Coord, heading: Direction },
    Reflected { at: Coord },
    Deflected { at: Coord, from: Direction, to: Direction },
    Reversed { at: Coord },
    Absorbed { at: Coord },
    Exited { at: Coord },
}

/// Full record of one ray: path, events and outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RayTrace {
    pub entry: Coord,
    pub outcome: RayOutcome,
    /// Every cell the ray occupied, entry first
    pub path: Vec<Coord>,
    pub events: Vec<RayEvent>,
}

impl RayTrace {
    /// Border points this ray used (entry, then exit if any)
    pub fn entry_exit_points(&self) -> Vec<Coord> {
        let mut points = vec![self.entry];
        if let RayOutcome::Exited(exit) = self.outcome {
            if exit != self.entry {
                points.push(exit);
            }
        }
        points
    }
}

/// Fire a ray into `board` from `entry`.
///
/// Fails with `InvalidEntryPoint` unless `entry` is a border entry cell. The
/// other errors mean the zone classification is inconsistent.
pub fn trace(board: &Board, entry: Coord) -> GameResult<RayTrace> {
    let Some(mut heading) = Direction::inward_from(entry) else {
        return Err(GameError::InvalidEntryPoint { at: entry });
    };

    let mut path = vec![entry];
    let mut events = vec![RayEvent::Entered { at: entry, heading }];
    let finish = |path: Vec<Coord>, events: Vec<RayEvent>, outcome: RayOutcome| -> GameResult<RayTrace> {
        log::debug!("Ray from {entry} -> {outcome:?}");
        Ok(RayTrace {
            entry,
            outcome,
            path,
            events,
        })
    };

    if board.zones().is_reflection(entry) {
        events.push(RayEvent::Reflected { at: entry });
        return finish(path, events, RayOutcome::Exited(entry));
    }

    let mut current = entry;
    for _ in 0..=MAX_RAY_STEPS {
        current = current
            .step(heading)
            .ok_or(GameError::RayLeftGrid { at: current, heading })?;
        path.push(current);

        if current.is_border_entry() {
            events.push(RayEvent::Exited { at: current });
            return finish(path, events, RayOutcome::Exited(current));
        }
        if board.has_atom(current) {
            events.push(RayEvent::Absorbed { at: current });
            return finish(path, events, RayOutcome::Absorbed);
        }

        match board.zone_at(current) {
            Zone::DoubleDeflection => {
                events.push(RayEvent::Reversed { at: current });
                heading = heading.reverse();
            }
            Zone::Deflection(diagonals) => {
                // First atom (layout order) with a turn for this heading decides.
                // Heading away from every listed atom bounces the ray back.
                match diagonals.iter().find_map(|diagonal| diagonal.turn(heading)) {
                    Some(turned) => {
                        events.push(RayEvent::Deflected {
                            at: current,
                            from: heading,
                            to: turned,
                        });
                        heading = turned;
                    }
                    None => {
                        events.push(RayEvent::Reversed { at: current });
                        heading = heading.reverse();
                    }
                }
            }
            Zone::Open | Zone::Reflection => {}
        }
    }

    Err(GameError::RayDidNotTerminate {
        entry,
        steps: MAX_RAY_STEPS,
    })
}
