//! Tests for the powerup band table and the interior overlay pass

#[cfg(test)]
mod tests {
    use crate::algorithm::random::ScriptedRandom;
    use mazestack::algorithm::overlay::{POWERUP_BANDS, populate, powerup_for_sample};
    use mazestack::spatial::TileGrid;
    use mazestack::spatial::tiles::TileKind;

    #[test]
    fn test_band_table_matches_codes() {
        let expected = [
            (0.905, 2),
            (0.915, 3),
            (0.925, 4),
            (0.935, 5),
            (0.945, 6),
            (0.965, 7),
            (0.975, 8),
            (0.985, 9),
            (0.995, 10),
        ];
        for (sample, code) in expected {
            assert_eq!(
                powerup_for_sample(sample).map(TileKind::code),
                Some(code),
                "sample {sample}"
            );
        }
    }

    // The gap between the fifth and sixth band assigns nothing
    #[test]
    fn test_gap_band_is_unassigned() {
        assert_eq!(powerup_for_sample(0.955), None);
        assert_eq!(powerup_for_sample(0.95), None);
    }

    #[test]
    fn test_samples_below_bands_are_unassigned() {
        for sample in [0.0, 0.2, 0.5, 0.899] {
            assert_eq!(powerup_for_sample(sample), None);
        }
    }

    // Lower bounds are inclusive, upper bounds exclusive
    #[test]
    fn test_band_edges_are_half_open() {
        assert_eq!(powerup_for_sample(0.90), Some(TileKind::Resistance));
        assert_eq!(powerup_for_sample(0.91), Some(TileKind::Coil));
        assert_eq!(powerup_for_sample(0.96), Some(TileKind::BeamTrigger));
        assert_eq!(powerup_for_sample(0.99), Some(TileKind::GhostTrigger));
    }

    #[test]
    fn test_bands_are_ordered_and_disjoint() {
        for pair in POWERUP_BANDS.windows(2) {
            assert!(pair[0].high <= pair[1].low);
            assert!(pair[0].kind.code() < pair[1].kind.code());
        }
    }

    // Every interior cell draws once, enclosing columns never change
    #[test]
    fn test_populate_only_touches_interior() {
        let mut grid = TileGrid::empty(5, 4).expect("valid dimensions");
        grid.fill_column(0, TileKind::Wall);
        grid.fill_column(4, TileKind::Wall);

        let mut rng = ScriptedRandom::new(vec![0.905], vec![]);
        let placed = populate(&mut grid, &mut rng);

        assert_eq!(rng.float_draws(), 3 * 4);
        assert_eq!(placed, 12);
        for row in 0..4 {
            assert_eq!(grid.get(0, row), Some(TileKind::Wall.code()));
            assert_eq!(grid.get(4, row), Some(TileKind::Wall.code()));
            for column in 1..4 {
                assert_eq!(grid.get(column, row), Some(TileKind::Resistance.code()));
            }
        }
    }

    // Cells outside every band keep their walls
    #[test]
    fn test_populate_keeps_prior_value_on_miss() {
        let mut grid = TileGrid::empty(3, 2).expect("valid dimensions");
        grid.fill_column(1, TileKind::Wall);

        let mut rng = ScriptedRandom::new(vec![0.955, 0.995], vec![]);
        let placed = populate(&mut grid, &mut rng);

        assert_eq!(placed, 1);
        assert_eq!(grid.get(1, 0), Some(TileKind::Wall.code()));
        assert_eq!(grid.get(1, 1), Some(TileKind::GhostTrigger.code()));
    }

    #[test]
    fn test_populate_narrow_grid_draws_nothing() {
        let mut grid = TileGrid::empty(2, 3).expect("valid dimensions");
        let mut rng = ScriptedRandom::new(vec![0.905], vec![]);

        assert_eq!(populate(&mut grid, &mut rng), 0);
        assert_eq!(rng.float_draws(), 0);
    }
}
