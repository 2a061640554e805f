//! `TrafficModel` — construction, tick loop, and snapshot export.

use gw_agent::{Agent, AgentArena, AgentKind, AgentRngs, LightState, TrafficLight, Vehicle};
use gw_core::{Direction, Position, SimConfig, SimRng, Tick};
use gw_grid::MultiGrid;

use crate::error::SimResult;
use crate::observer::SimObserver;
use crate::scheduler::TypedScheduler;
use crate::snapshot::AgentSnapshot;
use crate::stepper::TickStats;

/// The top-level simulation: owns the grid, the agents, and the scheduler.
///
/// Construction places every agent; after that the only mutation path is
/// [`step`](Self::step) (or the `run*` drivers), which advances each agent
/// exactly once per tick — all lights first, then all vehicles.
pub struct TrafficModel {
    pub config: SimConfig,
    /// The tick about to be executed by the next `step` call.
    pub tick: Tick,
    pub grid: MultiGrid,
    pub agents: AgentArena,
    pub rngs: AgentRngs,
    pub scheduler: TypedScheduler,
}

impl TrafficModel {
    /// Build the model: lights at their configured intersections with a
    /// random initial signal, then vehicles at uniformly random cells with
    /// random headings.  Lights register first, so in the grouped step mode
    /// they flip before any vehicle moves.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        let mut grid = MultiGrid::new(config.width, config.height);
        let mut agents = AgentArena::new();
        let mut scheduler = TypedScheduler::new();
        let mut rng = SimRng::new(config.seed);

        for &pos in &config.light_positions {
            let initial = if rng.gen_bool(0.5) {
                LightState::Green
            } else {
                LightState::Red
            };
            let id = agents.insert(Agent::Light(TrafficLight::new(
                initial,
                config.light_interval,
            )));
            grid.place_agent(id, pos)?;
            scheduler.add(id, AgentKind::Light)?;
        }

        for _ in 0..config.num_vehicles {
            let pos = Position::new(
                rng.gen_range(0..config.width),
                rng.gen_range(0..config.height),
            );
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            let id = agents.insert(Agent::Vehicle(Vehicle::new(direction)));
            // Vehicles may start stacked; they separate as soon as they move.
            grid.place_agent(id, pos)?;
            scheduler.add(id, AgentKind::Vehicle)?;
        }

        let rngs = AgentRngs::new(agents.len(), config.seed);
        Ok(Self {
            config,
            tick: Tick::ZERO,
            grid,
            agents,
            rngs,
            scheduler,
        })
    }

    // ── Tick drivers ──────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn step(&mut self) -> SimResult<TickStats> {
        let stats = self
            .scheduler
            .step(&mut self.agents, &mut self.grid, &mut self.rngs, true)?;
        self.tick = self.tick + 1;
        Ok(stats)
    }

    /// Run from the current tick to `config.total_ticks`, firing observer
    /// hooks at every tick boundary.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.tick < self.config.end_tick() {
            self.tick_once(observer)?;
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick_once(observer)?;
        }
        Ok(())
    }

    fn tick_once<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);
        let stats = self
            .scheduler
            .step(&mut self.agents, &mut self.grid, &mut self.rngs, true)?;
        observer.on_tick_end(now, &stats);
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.snapshots());
        }
        self.tick = self.tick + 1;
        Ok(())
    }

    // ── Read interface ────────────────────────────────────────────────────

    /// Render descriptors for every agent, in ascending id order.
    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents
            .ids()
            .filter_map(|id| {
                let pos = self.grid.position_of(id)?;
                Some(match *self.agents.get(id) {
                    Agent::Light(light) => AgentSnapshot::Light {
                        id,
                        pos,
                        state: light.state,
                    },
                    Agent::Vehicle(v) => AgentSnapshot::Vehicle {
                        id,
                        pos,
                        direction: v.direction,
                        waiting: v.waiting,
                    },
                })
            })
            .collect()
    }
}
