//! Unit tests for gw-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod space {
    use crate::{Direction, Position};

    #[test]
    fn deltas_match_headings() {
        assert_eq!(Direction::North.delta(), (0, 1));
        assert_eq!(Direction::South.delta(), (0, -1));
        assert_eq!(Direction::East.delta(), (1, 0));
        assert_eq!(Direction::West.delta(), (-1, 0));
    }

    #[test]
    fn step_is_unwrapped() {
        let p = Position::new(0, 0);
        assert_eq!(p.step(Direction::West), Position::new(-1, 0));
        assert_eq!(p.step(Direction::North), Position::new(0, 1));
    }

    #[test]
    fn all_headings_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
        assert_eq!(Direction::East.to_string(), "E");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick::ZERO + 1, Tick(1));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn agent_rng_is_deterministic_per_seed() {
        let mut a = AgentRng::new(12345, AgentId(3));
        let mut b = AgentRng::new(12345, AgentId(3));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..u32::MAX), b.gen_range(0..u32::MAX));
        }
    }

    #[test]
    fn distinct_agents_get_distinct_streams() {
        let mut a = AgentRng::new(12345, AgentId(0));
        let mut b = AgentRng::new(12345, AgentId(1));
        let draws_a: Vec<u64> = (0..8).map(|_| a.gen_range(0..u64::MAX)).collect();
        let draws_b: Vec<u64> = (0..8).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn sim_rng_is_deterministic_per_seed() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..100i32), b.gen_range(0..100i32));
            assert_eq!(a.gen_bool(0.5), b.gen_bool(0.5));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, Position, SimConfig, Tick};

    #[test]
    fn default_is_the_downtown_layout() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.width, 20);
        assert_eq!(cfg.height, 20);
        assert_eq!(cfg.num_vehicles, 40);
        assert_eq!(cfg.light_positions.len(), 9);
        assert_eq!(cfg.light_interval, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn end_tick() {
        let cfg = SimConfig {
            total_ticks: 200,
            ..SimConfig::default()
        };
        assert_eq!(cfg.end_tick(), Tick(200));
    }

    #[test]
    fn rejects_empty_grid() {
        let cfg = SimConfig {
            width: 0,
            light_positions: vec![],
            ..SimConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn rejects_zero_light_interval() {
        let cfg = SimConfig {
            light_interval: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroLightInterval));
    }

    #[test]
    fn rejects_off_grid_light() {
        let cfg = SimConfig {
            light_positions: vec![Position::new(25, 5)],
            ..SimConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::LightOutOfBounds { .. })
        ));
    }
}
