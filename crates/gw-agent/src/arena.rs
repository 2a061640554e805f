//! Agent storage: the closed `Agent` enum, the id-indexed arena, and the
//! per-agent RNG bank.

use std::fmt;

use gw_core::{AgentId, AgentRng};

use crate::light::TrafficLight;
use crate::vehicle::Vehicle;

// ── Agent ─────────────────────────────────────────────────────────────────────

/// Every agent kind in the simulation, as a closed tagged variant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Agent {
    Light(TrafficLight),
    Vehicle(Vehicle),
}

impl Agent {
    /// The scheduler bucket tag for this agent.  Fixed for its lifetime.
    #[inline]
    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Light(_) => AgentKind::Light,
            Agent::Vehicle(_) => AgentKind::Vehicle,
        }
    }
}

/// Type tag used by the scheduler's per-kind buckets.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Light,
    Vehicle,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgentKind::Light => "light",
            AgentKind::Vehicle => "vehicle",
        })
    }
}

// ── AgentArena ────────────────────────────────────────────────────────────────

/// Id-indexed storage for all agents.
///
/// `AgentId` values are handed out sequentially by
/// [`insert`](AgentArena::insert) and stay valid for the lifetime of the
/// arena — agents are never destroyed during a run.  Accessors index
/// directly; an id not issued by this arena is an internal logic error, not
/// a recoverable condition.
#[derive(Default)]
pub struct AgentArena {
    agents: Vec<Agent>,
}

impl AgentArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `agent` and return its id.
    pub fn insert(&mut self, agent: Agent) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(agent);
        id
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    #[inline]
    pub fn kind_of(&self, id: AgentId) -> AgentKind {
        self.get(id).kind()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }
}

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG streams, indexed by `AgentId`.
///
/// Kept apart from [`AgentArena`] so the step path can hold `&mut` to one
/// agent's RNG while reading the rest of the arena.
pub struct AgentRngs {
    inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
