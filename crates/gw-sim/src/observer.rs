//! Observer hooks for progress reporting and visualization feeds.

use gw_core::Tick;

use crate::snapshot::AgentSnapshot;
use crate::stepper::TickStats;

/// Callbacks invoked by [`TrafficModel::run`][crate::TrafficModel::run] at
/// tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} moved, {} waiting", stats.moved, stats.waiting);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every agent has been stepped this tick.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `snapshot_interval_ticks` ticks)
    /// with a render-ready descriptor for each agent.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[AgentSnapshot]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call the run
/// drivers but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
