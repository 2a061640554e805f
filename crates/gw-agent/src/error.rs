use gw_core::AgentId;
use gw_grid::GridError;
use thiserror::Error;

/// Stepping misuse.  Blocked movement is ordinary control flow; only
/// dispatching the wrong kind or stepping an unplaced agent surfaces here.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {0} is not a vehicle")]
    NotAVehicle(AgentId),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type AgentResult<T> = Result<T, AgentError>;
