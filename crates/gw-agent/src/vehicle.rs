//! The vehicle agent: directional movement with local collision avoidance.
//!
//! # Movement protocol
//!
//! Each step a vehicle looks one cell ahead along its heading (wrapped):
//!
//! 1. Free cell (no vehicle, no RED light) → advance, clear `waiting`.
//! 2. RED light ahead, or a vehicle ahead whose own `waiting` flag is set
//!    → stay put, `waiting = true`.
//! 3. Any other blocker (typically a vehicle that is still flowing) → draw
//!    a new heading and try once more; if that cell is also blocked, stay
//!    put with `waiting = true` but keep the new heading for next tick.
//!
//! The "is the vehicle ahead waiting" read uses live state, so the answer
//! depends on whether that vehicle was stepped earlier this tick.  That
//! registration-order dependence is part of the model's defined behavior
//! and is pinned by scheduler-level tests in `gw-sim`.

use gw_core::{AgentId, AgentRng, Direction, Position};
use gw_grid::{GridError, MultiGrid};

use crate::arena::{Agent, AgentArena};
use crate::error::AgentError;
use crate::light::LightState;

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// A mobile agent with a heading and a stall flag.
///
/// Vehicles have no destination; they drive their heading until blocked,
/// then wait or reroute.  Created once at model construction, never
/// destroyed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub direction: Direction,
    /// `true` iff the vehicle was blocked on its most recent step.
    pub waiting: bool,
}

impl Vehicle {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            waiting: false,
        }
    }
}

/// What a vehicle decided to do this step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum VehicleAction {
    /// Move to `to`, facing `direction`.  `rerouted` marks a lane change.
    Advance {
        to: Position,
        direction: Direction,
        rerouted: bool,
    },
    /// Stay put.  `direction` differs from the previous heading when a
    /// reroute was drawn but the new lane turned out blocked as well.
    Wait { direction: Direction },
}

/// Outcome of an applied vehicle step, for per-tick statistics.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Advanced,
    Rerouted,
    Waited,
}

// ── Decision ──────────────────────────────────────────────────────────────────

/// Run the movement protocol for one vehicle without touching any state.
pub fn plan_move(
    vehicle: Vehicle,
    pos: Position,
    grid: &MultiGrid,
    arena: &AgentArena,
    rng: &mut AgentRng,
) -> VehicleAction {
    let ahead = grid.neighbor(pos, vehicle.direction);
    if can_enter(ahead, grid, arena) {
        return VehicleAction::Advance {
            to: ahead,
            direction: vehicle.direction,
            rerouted: false,
        };
    }

    // Genuinely stuck (red signal, or a stalled vehicle ahead): wait it out.
    // Anything else is worth a lane change.
    if !red_light_at(ahead, grid, arena) && !stalled_vehicle_at(ahead, grid, arena) {
        let direction = pick_new_direction(vehicle.direction, rng);
        let target = grid.neighbor(pos, direction);
        if can_enter(target, grid, arena) {
            return VehicleAction::Advance {
                to: target,
                direction,
                rerouted: true,
            };
        }
        // The reroute failed; the new heading sticks.
        return VehicleAction::Wait { direction };
    }

    VehicleAction::Wait {
        direction: vehicle.direction,
    }
}

/// `true` if a vehicle may enter `target`: in bounds, no RED light, and no
/// other vehicle.  Sharing a cell with a GREEN light is allowed.
pub fn can_enter(target: Position, grid: &MultiGrid, arena: &AgentArena) -> bool {
    if grid.out_of_bounds(target) {
        // Unreachable on a torus (neighbors come pre-wrapped) but kept so
        // the predicate also holds for bounded grid variants.
        return false;
    }
    grid.cell_contents(target).iter().all(|&id| match arena.get(id) {
        Agent::Light(light) => light.state != LightState::Red,
        Agent::Vehicle(_) => false,
    })
}

fn red_light_at(target: Position, grid: &MultiGrid, arena: &AgentArena) -> bool {
    grid.cell_contents(target)
        .iter()
        .any(|&id| matches!(arena.get(id), Agent::Light(l) if l.state == LightState::Red))
}

/// `true` if `target` holds a vehicle whose own `waiting` flag is set.  A
/// vehicle that merely occupies the cell while still flowing does not count.
fn stalled_vehicle_at(target: Position, grid: &MultiGrid, arena: &AgentArena) -> bool {
    grid.cell_contents(target)
        .iter()
        .any(|&id| matches!(arena.get(id), Agent::Vehicle(v) if v.waiting))
}

/// Resample uniformly from the four headings until one differs from
/// `current`.
fn pick_new_direction(current: Direction, rng: &mut AgentRng) -> Direction {
    loop {
        let candidate = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        if candidate != current {
            return candidate;
        }
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// Step one vehicle: decide, then apply the move and the `waiting` flag.
///
/// The grid move and the vehicle's own state update land together, so the
/// next agent stepped this tick already observes the result.
pub fn step_vehicle(
    id: AgentId,
    arena: &mut AgentArena,
    grid: &mut MultiGrid,
    rng: &mut AgentRng,
) -> Result<MoveOutcome, AgentError> {
    let vehicle = match arena.get(id) {
        Agent::Vehicle(v) => *v,
        Agent::Light(_) => return Err(AgentError::NotAVehicle(id)),
    };
    let pos = grid.position_of(id).ok_or(GridError::NotPlaced(id))?;

    let action = plan_move(vehicle, pos, grid, arena, rng);
    let (outcome, updated) = match action {
        VehicleAction::Advance {
            to,
            direction,
            rerouted,
        } => {
            grid.move_agent(id, to)?;
            let outcome = if rerouted {
                MoveOutcome::Rerouted
            } else {
                MoveOutcome::Advanced
            };
            (
                outcome,
                Vehicle {
                    direction,
                    waiting: false,
                },
            )
        }
        VehicleAction::Wait { direction } => (
            MoveOutcome::Waited,
            Vehicle {
                direction,
                waiting: true,
            },
        ),
    };

    if let Agent::Vehicle(v) = arena.get_mut(id) {
        *v = updated;
    }
    Ok(outcome)
}
