//! `TypedScheduler` — per-kind agent activation.
//!
//! # Ordering contract
//!
//! [`step`](TypedScheduler::step) iterates kind buckets in **first-seen
//! order** (the order in which the first agent of each kind was added) and,
//! within a bucket, agents in **registration order**.  The model registers
//! all lights before any vehicle, so every light has flipped for this tick
//! before the first vehicle reads it.
//!
//! Within the vehicle bucket the same rule means a vehicle's view of the
//! vehicle ahead depends on whether that one was registered earlier
//! (already stepped this tick) or later (still showing last tick's state).
//! That order-dependence is inherited from the model's definition and is
//! pinned by tests, not smoothed over.

use rustc_hash::FxHashSet;

use gw_agent::{AgentArena, AgentKind, AgentRngs};
use gw_core::AgentId;
use gw_grid::MultiGrid;

use crate::error::{SimError, SimResult};
use crate::stepper::{TickStats, step_agent};

/// One ordered collection of registered agents sharing a kind.
struct Bucket {
    kind: AgentKind,
    agents: Vec<AgentId>,
}

/// Registry of agents grouped by kind, with deterministic activation order.
///
/// Holds only ids — the arena owns agent state and the grid owns placement.
#[derive(Default)]
pub struct TypedScheduler {
    /// Buckets in first-seen kind order.
    buckets: Vec<Bucket>,
    /// Global add order, backing the flat activation mode.
    insertion_order: Vec<AgentId>,
    /// Membership set for O(1) duplicate detection.
    registered: FxHashSet<AgentId>,
}

impl TypedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register `id` under `kind`, creating the bucket if absent.
    ///
    /// Registering the same agent twice is rejected with
    /// [`SimError::AlreadyRegistered`].
    pub fn add(&mut self, id: AgentId, kind: AgentKind) -> SimResult<()> {
        if !self.registered.insert(id) {
            return Err(SimError::AlreadyRegistered(id));
        }
        match self.buckets.iter_mut().find(|b| b.kind == kind) {
            Some(bucket) => bucket.agents.push(id),
            None => self.buckets.push(Bucket {
                kind,
                agents: vec![id],
            }),
        }
        self.insertion_order.push(id);
        Ok(())
    }

    /// Deregister `id`.  The bucket is dropped once its last agent leaves;
    /// unknown ids yield [`SimError::NotRegistered`].
    pub fn remove(&mut self, id: AgentId) -> SimResult<()> {
        if !self.registered.remove(&id) {
            return Err(SimError::NotRegistered(id));
        }
        if let Some(bi) = self.buckets.iter().position(|b| b.agents.contains(&id)) {
            self.buckets[bi].agents.retain(|&a| a != id);
            if self.buckets[bi].agents.is_empty() {
                self.buckets.remove(bi);
            }
        }
        self.insertion_order.retain(|&a| a != id);
        Ok(())
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.registered.contains(&id)
    }

    /// Total registered agents.
    pub fn agent_count(&self) -> usize {
        self.insertion_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }

    /// Kind tags in first-seen bucket order.
    pub fn kinds(&self) -> impl Iterator<Item = AgentKind> + '_ {
        self.buckets.iter().map(|b| b.kind)
    }

    /// Registered agents of `kind`, in registration order.
    pub fn agents_of(&self, kind: AgentKind) -> &[AgentId] {
        match self.buckets.iter().find(|b| b.kind == kind) {
            Some(bucket) => bucket.agents.as_slice(),
            None => &[],
        }
    }

    // ── Activation ────────────────────────────────────────────────────────

    /// Advance every registered agent exactly once.
    ///
    /// `by_type = true` is the normal grouped mode described in the module
    /// docs.  `by_type = false` degrades to a single flat pass in global
    /// add order, with no grouping guarantee between kinds.
    pub fn step(
        &self,
        arena: &mut AgentArena,
        grid: &mut MultiGrid,
        rngs: &mut AgentRngs,
        by_type: bool,
    ) -> SimResult<TickStats> {
        let mut stats = TickStats::default();
        if by_type {
            for bucket in &self.buckets {
                step_agents(&bucket.agents, arena, grid, rngs, &mut stats)?;
            }
        } else {
            step_agents(&self.insertion_order, arena, grid, rngs, &mut stats)?;
        }
        Ok(stats)
    }

    /// Step only the agents of one kind, in registration order.  A kind
    /// with no registered agents steps nothing.
    pub fn step_kind(
        &self,
        kind: AgentKind,
        arena: &mut AgentArena,
        grid: &mut MultiGrid,
        rngs: &mut AgentRngs,
    ) -> SimResult<TickStats> {
        let mut stats = TickStats::default();
        step_agents(self.agents_of(kind), arena, grid, rngs, &mut stats)?;
        Ok(stats)
    }
}

fn step_agents(
    agents: &[AgentId],
    arena: &mut AgentArena,
    grid: &mut MultiGrid,
    rngs: &mut AgentRngs,
    stats: &mut TickStats,
) -> SimResult<()> {
    for &id in agents {
        let outcome = step_agent(id, arena, grid, rngs)?;
        stats.record(outcome);
    }
    Ok(())
}
