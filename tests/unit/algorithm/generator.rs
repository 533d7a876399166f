//! Tests for section layouts, dimension validation and seeded reproducibility

#[cfg(test)]
mod tests {
    use crate::algorithm::random::ScriptedRandom;
    use mazestack::LevelError;
    use mazestack::algorithm::generator::{
        GridGenerator, LayoutStrategy, enclose, generate, interior_column,
    };
    use mazestack::algorithm::random::SeededRandom;
    use mazestack::spatial::TileGrid;
    use mazestack::spatial::tiles::TileKind;

    const WALL: u8 = TileKind::Wall.code();

    fn assert_enclosed(grid: &TileGrid) {
        for row in 0..grid.height() {
            assert_eq!(grid.get(0, row), Some(WALL), "left wall at row {row}");
            assert_eq!(
                grid.get(grid.width() - 1, row),
                Some(WALL),
                "right wall at row {row}"
            );
        }
    }

    // Empty layout: walls on the edges, nothing else
    #[test]
    fn test_empty_layout_has_only_side_walls() {
        for (width, height) in [(1, 1), (2, 3), (3, 1), (9, 16), (255, 2)] {
            let generator = GridGenerator::new(width, height).expect("valid dimensions");
            let mut rng = SeededRandom::new(0);
            let grid = generator
                .layout(LayoutStrategy::Empty, &mut rng)
                .expect("layout succeeds");

            for (column, row, code) in grid.cells() {
                let expected = if column == 0 || column == width - 1 {
                    WALL
                } else {
                    0
                };
                assert_eq!(code, expected, "cell ({column}, {row}) of {width}x{height}");
            }
        }
    }

    #[test]
    fn test_empty_layout_consumes_no_randomness() {
        let generator = GridGenerator::new(6, 4).expect("valid dimensions");
        let mut rng = ScriptedRandom::new(vec![0.0], vec![1]);
        generator
            .layout(LayoutStrategy::Empty, &mut rng)
            .expect("layout succeeds");
        assert_eq!(rng.float_draws(), 0);
        assert_eq!(rng.int_draws(), 0);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        for (width, height) in [(0, 5), (5, 0), (0, 0), (256, 4)] {
            let result = GridGenerator::new(width, height);
            assert!(
                matches!(result, Err(LevelError::InvalidDimensions { .. })),
                "{width}x{height} should be rejected"
            );
        }

        let mut rng = SeededRandom::new(1);
        assert!(generate(0, 3, LayoutStrategy::RandomNormal, &mut rng).is_err());
    }

    // Samples below the wall chance raise interior walls, one draw per cell
    #[test]
    fn test_random_normal_draws_once_per_interior_cell() {
        let generator = GridGenerator::new(4, 2).expect("valid dimensions");
        let mut rng = ScriptedRandom::new(vec![0.1, 0.5], vec![]);
        let grid = generator
            .layout(LayoutStrategy::RandomNormal, &mut rng)
            .expect("layout succeeds");

        assert_eq!(rng.float_draws(), 2 * 2);
        assert_enclosed(&grid);
        assert_eq!(grid.get(1, 0), Some(WALL));
        assert_eq!(grid.get(2, 0), Some(0));
        assert_eq!(grid.get(1, 1), Some(WALL));
        assert_eq!(grid.get(2, 1), Some(0));
    }

    #[test]
    fn test_random_normal_is_reproducible_with_seed() {
        let first = generate(11, 30, LayoutStrategy::RandomNormal, &mut SeededRandom::new(99))
            .expect("generation succeeds");
        let second = generate(11, 30, LayoutStrategy::RandomNormal, &mut SeededRandom::new(99))
            .expect("generation succeeds");

        assert_eq!(first, second);
        assert_eq!(first.as_array(), second.as_array());
    }

    #[test]
    fn test_random_normal_wall_density_near_chance() {
        let generator = GridGenerator::new(102, 100).expect("valid dimensions");
        let grid = generator
            .layout(LayoutStrategy::RandomNormal, &mut SeededRandom::new(5))
            .expect("layout succeeds");

        let interior_walls = grid.count(TileKind::Wall) - 2 * 100;
        let ratio = interior_walls as f64 / (100.0 * 100.0);
        assert!((0.17..0.23).contains(&ratio), "wall ratio {ratio}");
    }

    // Three extra full-height columns from the scripted indices
    #[test]
    fn test_random_column_raises_selected_columns() {
        let generator = GridGenerator::new(7, 3).expect("valid dimensions");
        let mut rng = ScriptedRandom::new(vec![], vec![2, 4, 2]);
        let grid = generator
            .layout(LayoutStrategy::RandomColumn, &mut rng)
            .expect("layout succeeds");

        assert_eq!(rng.int_draws(), 3);
        assert_enclosed(&grid);
        for row in 0..3 {
            for column in 0..7 {
                let expected = if [0, 2, 4, 6].contains(&column) { WALL } else { 0 };
                assert_eq!(grid.get(column, row), Some(expected));
            }
        }
    }

    // Width 5 only ever selects columns 1, 2 or 3
    #[test]
    fn test_random_column_stays_inside_width_five() {
        let mut seen = [false; 5];
        for seed in 0..200 {
            let mut rng = SeededRandom::new(seed);
            let grid = GridGenerator::new(5, 2)
                .expect("valid dimensions")
                .layout(LayoutStrategy::RandomColumn, &mut rng)
                .expect("layout succeeds");
            assert_enclosed(&grid);
            for column in 1..4 {
                if grid.get(column, 0) == Some(WALL) {
                    seen[column] = true;
                }
            }
        }
        assert!(seen[1] && seen[2] && seen[3]);
    }

    // Out-of-range draws from a faulty source still land inside the interior
    #[test]
    fn test_interior_column_is_bounded_by_construction() {
        let mut rng = ScriptedRandom::new(vec![], vec![-4, 0, 4, 200]);
        for _ in 0..4 {
            let column = interior_column(5, &mut rng).expect("width 5 has an interior");
            assert!((1..=3).contains(&column), "column {column}");
        }
    }

    #[test]
    fn test_interior_column_none_for_narrow_sections() {
        let mut rng = SeededRandom::new(0);
        assert_eq!(interior_column(1, &mut rng), None);
        assert_eq!(interior_column(2, &mut rng), None);
        assert_eq!(interior_column(3, &mut rng), Some(1));
    }

    #[test]
    fn test_random_column_narrow_section_has_only_walls() {
        let grid = generate(2, 4, LayoutStrategy::RandomColumn, &mut SeededRandom::new(8))
            .expect("generation succeeds");
        assert_eq!(grid.count(TileKind::Wall), 8);
    }

    // Overlay runs after the layout and never touches the enclosure
    #[test]
    fn test_generate_applies_overlay() {
        let generator = GridGenerator::new(3, 2).expect("valid dimensions");
        let mut rng = ScriptedRandom::new(vec![0.925], vec![]);
        let grid = generator
            .generate(LayoutStrategy::Empty, &mut rng)
            .expect("generation succeeds");

        assert_enclosed(&grid);
        assert_eq!(grid.count(TileKind::Battery), 2);
        assert_eq!(generator.width(), 3);
        assert_eq!(generator.height(), 2);
    }

    #[test]
    fn test_enclose_single_column() {
        let mut grid = TileGrid::empty(1, 3).expect("valid dimensions");
        enclose(&mut grid);
        assert_eq!(grid.count(TileKind::Wall), 3);
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(LayoutStrategy::Empty.label(), "empty");
        assert_eq!(LayoutStrategy::RandomNormal.label(), "normal");
        assert_eq!(LayoutStrategy::RandomColumn.label(), "column");
    }
}
