//! `gw-grid` — toroidal multi-occupancy grid for the gridway traffic
//! simulation.
//!
//! The grid is the single authority on *where agents are*.  Agents never
//! hold a handle into the grid's internals; the grid knows them only by
//! [`AgentId`][gw_core::AgentId], and every placement change goes through
//! [`MultiGrid::place_agent`] / [`MultiGrid::move_agent`], which keep the
//! per-cell occupancy index and the per-agent position map in sync in one
//! operation.

pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::MultiGrid;
