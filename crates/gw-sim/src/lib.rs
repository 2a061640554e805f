//! `gw-sim` — scheduler and model orchestration for the gridway traffic
//! simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                       |
//! |---------------|------------------------------------------------|
//! | [`scheduler`] | `TypedScheduler` (per-kind activation)         |
//! | [`stepper`]   | per-agent dispatch, `TickStats`                |
//! | [`model`]     | `TrafficModel` (construction + tick loop)      |
//! | [`observer`]  | `SimObserver`, `NoopObserver`                  |
//! | [`snapshot`]  | `AgentSnapshot` (read-only render descriptor)  |
//! | [`error`]     | `SimError`, `SimResult`                        |

pub mod error;
pub mod model;
pub mod observer;
pub mod scheduler;
pub mod snapshot;
pub mod stepper;


pub use error::{SimError, SimResult};
pub use model::TrafficModel;
pub use observer::{NoopObserver, SimObserver};
pub use scheduler::TypedScheduler;
pub use snapshot::AgentSnapshot;
pub use stepper::TickStats;
