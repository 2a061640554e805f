//! `gw-core` — foundational types for the `gridway` traffic simulation.
//!
//! This crate is a dependency of every other `gw-*` crate.  It intentionally
//! has no `gw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`ids`]    | `AgentId`                                      |
//! | [`space`]  | `Position`, `Direction`                        |
//! | [`time`]   | `Tick`                                         |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (model-level) |
//! | [`config`] | `SimConfig`, `ConfigError`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod ids;
pub mod rng;
pub mod space;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConfigError, SimConfig, DEFAULT_LIGHT_INTERVAL};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use space::{Direction, Position};
pub use time::Tick;
