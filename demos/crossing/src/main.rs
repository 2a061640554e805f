//! crossing — a nine-intersection downtown grid.
//!
//! Forty vehicles on a 20×20 wrapped grid with nine timed traffic lights.
//! Prints per-tick traffic stats at a fixed cadence and dumps the final
//! agent snapshots as JSON.

use std::time::Instant;

use anyhow::Result;

use gw_core::{SimConfig, Tick};
use gw_sim::{AgentSnapshot, SimObserver, TickStats, TrafficModel};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS:     u64 = 200;
const REPORT_INTERVAL: u64 = 20;
const SEED:            u64 = 42;

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    interval: u64,
}

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        if tick.0.is_multiple_of(self.interval) {
            println!(
                "{tick:>5}: {:>2} moved ({} rerouted), {:>2} waiting",
                stats.moved, stats.rerouted, stats.waiting
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("simulation finished at {final_tick}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SimConfig {
        total_ticks: TOTAL_TICKS,
        seed: SEED,
        ..SimConfig::default()
    };
    println!("=== crossing — grid traffic ===");
    println!(
        "Grid: {}x{}  |  Vehicles: {}  |  Lights: {}  |  Seed: {}",
        config.width,
        config.height,
        config.num_vehicles,
        config.light_positions.len(),
        config.seed
    );
    println!();

    let mut model = TrafficModel::new(config)?;
    let mut observer = ProgressPrinter {
        interval: REPORT_INTERVAL,
    };

    let t0 = Instant::now();
    model.run(&mut observer)?;
    let elapsed = t0.elapsed();

    println!();
    println!(
        "{} ticks in {:.3} ms",
        TOTAL_TICKS,
        elapsed.as_secs_f64() * 1e3
    );

    let snapshots = model.snapshots();
    let stalled = snapshots
        .iter()
        .filter(|s| matches!(s, AgentSnapshot::Vehicle { waiting: true, .. }))
        .count();
    println!("stalled vehicles at the end: {stalled}");
    println!();
    println!("{}", serde_json::to_string_pretty(&snapshots)?);

    Ok(())
}
