//! The `MultiGrid`: a fixed-size toroidal cell space with multi-occupancy.
//!
//! # Data layout
//!
//! Two maps, kept in sync by every mutating operation:
//!
//! - `cells: Position → Vec<AgentId>` — occupants per cell.  Cells with no
//!   occupants carry no entry, so iteration cost tracks occupied cells, not
//!   grid area.
//! - `positions: AgentId → Position` — the one cell each placed agent is in.
//!
//! `FxHashMap` over the std hasher: keys are tiny integer pairs / u32
//! newtypes and lookups sit on the per-step hot path.
//!
//! # Wrapping
//!
//! [`move_agent`](MultiGrid::move_agent) and
//! [`neighbor`](MultiGrid::neighbor) wrap their target coordinate, so on
//! this grid [`out_of_bounds`](MultiGrid::out_of_bounds) never holds for a
//! reachable cell.  [`place_agent`](MultiGrid::place_agent) does *not* wrap:
//! initial placement with an off-grid coordinate is a caller bug and is
//! reported as such.

use rustc_hash::FxHashMap;

use gw_core::{AgentId, Direction, Position};

use crate::error::{GridError, GridResult};

/// A toroidal 2-D grid in which a cell may hold any number of agents.
pub struct MultiGrid {
    width: i32,
    height: i32,
    /// Occupants per cell.  No entry means the cell is empty.
    cells: FxHashMap<Position, Vec<AgentId>>,
    /// Current cell of every placed agent.
    positions: FxHashMap<AgentId, Position>,
}

impl MultiGrid {
    /// Create an empty `width × height` grid.  Dimensions must be positive;
    /// `SimConfig::validate` enforces this before any grid is built.
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: FxHashMap::default(),
            positions: FxHashMap::default(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// `true` if `pos` names no cell of this grid.  Always false for wrapped
    /// coordinates; kept as a predicate so bounded (non-wrapping) variants
    /// share the same movement code.
    #[inline]
    pub fn out_of_bounds(&self, pos: Position) -> bool {
        pos.x < 0 || pos.x >= self.width || pos.y < 0 || pos.y >= self.height
    }

    /// Fold `pos` onto the torus.
    #[inline]
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    /// The cell one step from `pos` in `direction`, wrapped.
    #[inline]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Position {
        self.wrap(pos.step(direction))
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Put an agent onto the grid for the first time.
    pub fn place_agent(&mut self, id: AgentId, pos: Position) -> GridResult<()> {
        if self.out_of_bounds(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        if self.positions.contains_key(&id) {
            return Err(GridError::AlreadyPlaced(id));
        }
        self.cells.entry(pos).or_default().push(id);
        self.positions.insert(id, pos);
        Ok(())
    }

    /// Move a placed agent to `to` (wrapped), updating both maps together.
    pub fn move_agent(&mut self, id: AgentId, to: Position) -> GridResult<()> {
        let to = self.wrap(to);
        let from = match self.positions.get(&id) {
            Some(&p) => p,
            None => return Err(GridError::NotPlaced(id)),
        };
        if from == to {
            return Ok(());
        }
        self.detach(id, from);
        self.cells.entry(to).or_default().push(id);
        self.positions.insert(id, to);
        Ok(())
    }

    /// Take an agent off the grid, returning the cell it occupied.
    pub fn remove_agent(&mut self, id: AgentId) -> GridResult<Position> {
        let pos = match self.positions.remove(&id) {
            Some(p) => p,
            None => return Err(GridError::NotPlaced(id)),
        };
        self.detach(id, pos);
        Ok(pos)
    }

    fn detach(&mut self, id: AgentId, at: Position) {
        if let Some(occupants) = self.cells.get_mut(&at) {
            occupants.retain(|&o| o != id);
            if occupants.is_empty() {
                self.cells.remove(&at);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All agents in `pos`, in no particular order.  Empty for vacant cells.
    pub fn cell_contents(&self, pos: Position) -> &[AgentId] {
        match self.cells.get(&pos) {
            Some(occupants) => occupants.as_slice(),
            None => &[],
        }
    }

    /// The cell `id` occupies, or `None` if it was never placed.
    #[inline]
    pub fn position_of(&self, id: AgentId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    /// Number of placed agents.
    pub fn agent_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Every placed agent and its cell, in arbitrary order.
    pub fn iter_agents(&self) -> impl Iterator<Item = (AgentId, Position)> + '_ {
        self.positions.iter().map(|(&id, &pos)| (id, pos))
    }
}
