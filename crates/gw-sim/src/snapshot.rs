//! Read-only agent descriptors for the rendering/UI layer.
//!
//! The visualization layer consumes these and nothing else: kind, position,
//! and the color-relevant state — the signal for lights, the heading and
//! stall flag for vehicles.

use gw_agent::LightState;
use gw_core::{AgentId, Direction, Position};

/// One agent's render-relevant state at a tick boundary.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentSnapshot {
    Light {
        id: AgentId,
        pos: Position,
        state: LightState,
    },
    Vehicle {
        id: AgentId,
        pos: Position,
        direction: Direction,
        waiting: bool,
    },
}

impl AgentSnapshot {
    pub fn id(&self) -> AgentId {
        match *self {
            AgentSnapshot::Light { id, .. } | AgentSnapshot::Vehicle { id, .. } => id,
        }
    }

    pub fn pos(&self) -> Position {
        match *self {
            AgentSnapshot::Light { pos, .. } | AgentSnapshot::Vehicle { pos, .. } => pos,
        }
    }
}
