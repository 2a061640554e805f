use gw_core::{AgentId, Position};
use thiserror::Error;

/// Placement misuse.  Blocked movement is ordinary control flow and never
/// surfaces here; these cover only calls that violate the placement
/// invariant (one cell per placed agent).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("agent {0} is already placed on the grid")]
    AlreadyPlaced(AgentId),

    #[error("agent {0} has not been placed on the grid")]
    NotPlaced(AgentId),

    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),
}

pub type GridResult<T> = Result<T, GridError>;
