//! Per-agent step dispatch and per-tick statistics.

use gw_agent::{Agent, AgentArena, AgentKind, AgentRngs, MoveOutcome, step_vehicle};
use gw_core::AgentId;
use gw_grid::MultiGrid;

use crate::error::SimResult;

/// What happened when one agent was stepped.
#[derive(Copy, Clone, Debug)]
pub(crate) enum StepOutcome {
    LightStepped,
    Vehicle(MoveOutcome),
}

/// Dispatch one agent's step by its kind tag.
pub(crate) fn step_agent(
    id: AgentId,
    arena: &mut AgentArena,
    grid: &mut MultiGrid,
    rngs: &mut AgentRngs,
) -> SimResult<StepOutcome> {
    match arena.kind_of(id) {
        AgentKind::Light => {
            if let Agent::Light(light) = arena.get_mut(id) {
                light.step();
            }
            Ok(StepOutcome::LightStepped)
        }
        AgentKind::Vehicle => {
            let outcome = step_vehicle(id, arena, grid, rngs.get_mut(id))?;
            Ok(StepOutcome::Vehicle(outcome))
        }
    }
}

/// Counters for one activation pass (a whole tick, or one kind's bucket).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TickStats {
    /// Agents stepped, lights and vehicles alike.
    pub stepped: usize,
    /// Vehicles that advanced a cell, lane changes included.
    pub moved: usize,
    /// The subset of `moved` that advanced only after a lane change.
    pub rerouted: usize,
    /// Vehicles that ended the pass blocked (`waiting == true`).
    pub waiting: usize,
}

impl TickStats {
    pub(crate) fn record(&mut self, outcome: StepOutcome) {
        self.stepped += 1;
        match outcome {
            StepOutcome::LightStepped => {}
            StepOutcome::Vehicle(MoveOutcome::Advanced) => self.moved += 1,
            StepOutcome::Vehicle(MoveOutcome::Rerouted) => {
                self.moved += 1;
                self.rerouted += 1;
            }
            StepOutcome::Vehicle(MoveOutcome::Waited) => self.waiting += 1,
        }
    }
}
