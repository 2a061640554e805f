//! `gw-agent` — agent state and behavior for the gridway traffic simulation.
//!
//! Two agent kinds exist: timer-driven traffic lights and direction-driven
//! vehicles.  Both are plain state machines stored in an [`AgentArena`]
//! (a `Vec` indexed by `AgentId`).  The closed [`Agent`] enum replaces
//! open-ended dynamic dispatch: grid queries hand back ids, and call sites
//! match on the variant tag.
//!
//! # Crate layout
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`light`]   | `LightState`, `TrafficLight`                    |
//! | [`vehicle`] | `Vehicle`, movement protocol, `step_vehicle`    |
//! | [`arena`]   | `Agent`, `AgentKind`, `AgentArena`, `AgentRngs` |
//! | [`error`]   | `AgentError`, `AgentResult`                     |

pub mod arena;
pub mod error;
pub mod light;
pub mod vehicle;


pub use arena::{Agent, AgentArena, AgentKind, AgentRngs};
pub use error::{AgentError, AgentResult};
pub use light::{LightState, TrafficLight};
pub use vehicle::{MoveOutcome, Vehicle, VehicleAction, can_enter, plan_move, step_vehicle};
