//! Top-level simulation configuration.
//!
//! Mirrors the knobs an external UI layer exposes (grid size, vehicle count)
//! plus the fixed intersection layout, the light timing, and the determinism
//! seed.  Validation happens once, at model construction.

use thiserror::Error;

use crate::space::Position;
use crate::time::Tick;

/// Steps between RED ↔ GREEN flips when no other interval is configured.
pub const DEFAULT_LIGHT_INTERVAL: u32 = 10;

/// Construction-time parameters for a run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: i32,

    /// Grid height in cells.
    pub height: i32,

    /// Number of vehicles placed at startup.
    pub num_vehicles: usize,

    /// Cells that hold a traffic light — one light per listed position.
    pub light_positions: Vec<Position>,

    /// Steps between RED ↔ GREEN flips, applied to every light.
    pub light_interval: u32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Total ticks for `TrafficModel::run`.
    pub total_ticks: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    /// The classic downtown layout: a 20×20 grid, nine lights on a 5-cell
    /// lattice, and forty vehicles.
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            num_vehicles: 40,
            light_positions: vec![
                Position::new(5, 5),
                Position::new(5, 15),
                Position::new(15, 5),
                Position::new(15, 15),
                Position::new(10, 10),
                Position::new(10, 15),
                Position::new(15, 10),
                Position::new(5, 10),
                Position::new(10, 5),
            ],
            light_interval: DEFAULT_LIGHT_INTERVAL,
            seed: 42,
            total_ticks: 200,
            snapshot_interval_ticks: 0,
        }
    }
}

impl SimConfig {
    /// The tick at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Check the configuration for values the model cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.light_interval == 0 {
            return Err(ConfigError::ZeroLightInterval);
        }
        for &pos in &self.light_positions {
            if pos.x < 0 || pos.x >= self.width || pos.y < 0 || pos.y >= self.height {
                return Err(ConfigError::LightOutOfBounds {
                    pos,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        Ok(())
    }
}

/// A configuration the model refuses to build from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions {width}x{height} must be at least 1x1")]
    EmptyGrid { width: i32, height: i32 },

    #[error("light interval must be at least 1 step")]
    ZeroLightInterval,

    #[error("traffic light at {pos} lies outside the {width}x{height} grid")]
    LightOutOfBounds {
        pos: Position,
        width: i32,
        height: i32,
    },
}
