use gw_agent::AgentError;
use gw_core::{AgentId, ConfigError};
use gw_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("agent {0} is already registered with the scheduler")]
    AlreadyRegistered(AgentId),

    #[error("agent {0} is not registered with the scheduler")]
    NotRegistered(AgentId),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
