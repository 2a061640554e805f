//! Unit tests for gw-grid.

#[cfg(test)]
mod geometry {
    use gw_core::{Direction, Position};

    use crate::MultiGrid;

    #[test]
    fn out_of_bounds_edges() {
        let g = MultiGrid::new(10, 8);
        assert!(!g.out_of_bounds(Position::new(0, 0)));
        assert!(!g.out_of_bounds(Position::new(9, 7)));
        assert!(g.out_of_bounds(Position::new(10, 0)));
        assert!(g.out_of_bounds(Position::new(0, 8)));
        assert!(g.out_of_bounds(Position::new(-1, 0)));
    }

    #[test]
    fn wrap_folds_onto_torus() {
        let g = MultiGrid::new(10, 8);
        assert_eq!(g.wrap(Position::new(-1, 3)), Position::new(9, 3));
        assert_eq!(g.wrap(Position::new(10, 3)), Position::new(0, 3));
        assert_eq!(g.wrap(Position::new(4, -1)), Position::new(4, 7));
        assert_eq!(g.wrap(Position::new(4, 8)), Position::new(4, 0));
    }

    #[test]
    fn wrapped_coordinates_are_never_out_of_bounds() {
        let g = MultiGrid::new(5, 5);
        for x in -6..12 {
            for y in -6..12 {
                assert!(!g.out_of_bounds(g.wrap(Position::new(x, y))));
            }
        }
    }

    #[test]
    fn neighbor_wraps_all_four_edges() {
        let g = MultiGrid::new(10, 8);
        assert_eq!(
            g.neighbor(Position::new(0, 3), Direction::West),
            Position::new(9, 3)
        );
        assert_eq!(
            g.neighbor(Position::new(9, 3), Direction::East),
            Position::new(0, 3)
        );
        assert_eq!(
            g.neighbor(Position::new(4, 7), Direction::North),
            Position::new(4, 0)
        );
        assert_eq!(
            g.neighbor(Position::new(4, 0), Direction::South),
            Position::new(4, 7)
        );
    }
}

#[cfg(test)]
mod placement {
    use gw_core::{AgentId, Position};

    use crate::{GridError, MultiGrid};

    #[test]
    fn place_and_query() {
        let mut g = MultiGrid::new(10, 10);
        g.place_agent(AgentId(0), Position::new(3, 4)).unwrap();
        assert_eq!(g.cell_contents(Position::new(3, 4)), &[AgentId(0)]);
        assert_eq!(g.position_of(AgentId(0)), Some(Position::new(3, 4)));
        assert_eq!(g.agent_count(), 1);
    }

    #[test]
    fn cells_hold_multiple_occupants() {
        let mut g = MultiGrid::new(10, 10);
        g.place_agent(AgentId(0), Position::new(3, 4)).unwrap();
        g.place_agent(AgentId(1), Position::new(3, 4)).unwrap();
        let occupants = g.cell_contents(Position::new(3, 4));
        assert_eq!(occupants.len(), 2);
        assert!(occupants.contains(&AgentId(0)));
        assert!(occupants.contains(&AgentId(1)));
    }

    #[test]
    fn double_place_is_rejected() {
        let mut g = MultiGrid::new(10, 10);
        g.place_agent(AgentId(0), Position::new(3, 4)).unwrap();
        assert_eq!(
            g.place_agent(AgentId(0), Position::new(5, 5)),
            Err(GridError::AlreadyPlaced(AgentId(0)))
        );
    }

    #[test]
    fn place_out_of_bounds_is_rejected() {
        let mut g = MultiGrid::new(10, 10);
        assert_eq!(
            g.place_agent(AgentId(0), Position::new(10, 0)),
            Err(GridError::OutOfBounds(Position::new(10, 0)))
        );
    }

    #[test]
    fn vacant_cell_is_empty() {
        let g = MultiGrid::new(10, 10);
        assert!(g.cell_contents(Position::new(0, 0)).is_empty());
        assert_eq!(g.position_of(AgentId(0)), None);
    }
}

#[cfg(test)]
mod movement {
    use gw_core::{AgentId, Position};

    use crate::{GridError, MultiGrid};

    #[test]
    fn move_updates_both_maps() {
        let mut g = MultiGrid::new(10, 10);
        g.place_agent(AgentId(0), Position::new(3, 4)).unwrap();
        g.move_agent(AgentId(0), Position::new(4, 4)).unwrap();
        assert!(g.cell_contents(Position::new(3, 4)).is_empty());
        assert_eq!(g.cell_contents(Position::new(4, 4)), &[AgentId(0)]);
        assert_eq!(g.position_of(AgentId(0)), Some(Position::new(4, 4)));
    }

    #[test]
    fn move_wraps_target() {
        let mut g = MultiGrid::new(10, 10);
        g.place_agent(AgentId(0), Position::new(0, 5)).unwrap();
        g.move_agent(AgentId(0), Position::new(-1, 5)).unwrap();
        assert_eq!(g.position_of(AgentId(0)), Some(Position::new(9, 5)));
    }

    #[test]
    fn move_unplaced_is_rejected() {
        let mut g = MultiGrid::new(10, 10);
        assert_eq!(
            g.move_agent(AgentId(0), Position::new(1, 1)),
            Err(GridError::NotPlaced(AgentId(0)))
        );
    }

    #[test]
    fn move_leaves_co_occupants_in_place() {
        let mut g = MultiGrid::new(10, 10);
        g.place_agent(AgentId(0), Position::new(3, 4)).unwrap();
        g.place_agent(AgentId(1), Position::new(3, 4)).unwrap();
        g.move_agent(AgentId(0), Position::new(4, 4)).unwrap();
        assert_eq!(g.cell_contents(Position::new(3, 4)), &[AgentId(1)]);
    }

    #[test]
    fn remove_clears_agent() {
        let mut g = MultiGrid::new(10, 10);
        g.place_agent(AgentId(0), Position::new(3, 4)).unwrap();
        assert_eq!(g.remove_agent(AgentId(0)), Ok(Position::new(3, 4)));
        assert!(g.cell_contents(Position::new(3, 4)).is_empty());
        assert_eq!(g.position_of(AgentId(0)), None);
        assert!(g.is_empty());
        assert_eq!(
            g.remove_agent(AgentId(0)),
            Err(GridError::NotPlaced(AgentId(0)))
        );
    }
}
