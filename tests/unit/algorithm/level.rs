//! Tests for level assembly, cursor advancement and section retirement

#[cfg(test)]
mod tests {
    use crate::algorithm::random::ScriptedRandom;
    use mazestack::LevelError;
    use mazestack::algorithm::generator::{GridGenerator, LayoutStrategy};
    use mazestack::algorithm::level::Level;
    use mazestack::algorithm::random::SeededRandom;
    use mazestack::io::spawn::SpawnLedger;
    use mazestack::spatial::SectionStitcher;
    use mazestack::spatial::section::SectionState;

    #[test]
    fn test_sections_stack_without_gaps() {
        let mut level = Level::new(10);
        let mut spawner = SpawnLedger::new();
        let mut rng = SeededRandom::new(4);
        let generator = GridGenerator::new(7, 5).expect("valid dimensions");

        let first = level
            .push_generated(&generator, LayoutStrategy::RandomNormal, &mut spawner, &mut rng)
            .expect("first section");
        let second = level
            .push_blueprint("101\n111\n000", &mut spawner, &mut rng)
            .expect("second section");

        assert_eq!(first, 10..15);
        assert_eq!(second, 15..18);
        assert_eq!(level.cursor(), 18);
        assert_eq!(level.section_count(), 2);

        let origins: Vec<i32> = level.sections().map(|s| s.origin_y()).collect();
        assert_eq!(origins, vec![10, 15]);
    }

    #[test]
    fn test_push_spawns_non_empty_tiles() {
        let mut level = Level::new(0);
        let mut spawner = SpawnLedger::new();
        let mut rng = ScriptedRandom::new(vec![0.0], vec![0]);

        level
            .push_blueprint("1001\n0220", &mut spawner, &mut rng)
            .expect("valid blueprint");

        assert_eq!(spawner.live_count(), 4);
        let section = level.sections().next().expect("one section");
        assert_eq!(section.state(), SectionState::Spawned);
        assert_eq!(section.handles().len(), 4);
    }

    // A rejected blueprint leaves the cursor and spawner untouched
    #[test]
    fn test_malformed_blueprint_keeps_cursor() {
        let mut level = Level::new(3);
        let mut spawner = SpawnLedger::new();
        let mut rng = SeededRandom::new(0);

        let result = level.push_blueprint("11\n111", &mut spawner, &mut rng);

        assert!(matches!(result, Err(LevelError::MalformedBlueprint { .. })));
        assert_eq!(level.cursor(), 3);
        assert_eq!(level.section_count(), 0);
        assert_eq!(spawner.spawned_total(), 0);
    }

    #[test]
    fn test_retire_oldest_releases_lowest_section() {
        let mut level = Level::new(0);
        let mut spawner = SpawnLedger::new();
        let mut rng = SeededRandom::new(0);

        level
            .push_blueprint("11\n11", &mut spawner, &mut rng)
            .expect("valid blueprint");
        level
            .push_blueprint("1", &mut spawner, &mut rng)
            .expect("valid blueprint");
        assert_eq!(spawner.live_count(), 5);

        assert_eq!(level.retire_oldest(&mut spawner), Some(0..2));
        assert_eq!(spawner.live_count(), 1);
        assert_eq!(level.section_count(), 1);
        assert_eq!(level.cursor(), 3);
    }

    #[test]
    fn test_clear_releases_everything_and_keeps_cursor() {
        let mut level = Level::with_stitcher(SectionStitcher::new(2), -4);
        let mut spawner = SpawnLedger::new();
        let mut rng = SeededRandom::new(0);
        let generator = GridGenerator::new(5, 4).expect("valid dimensions");

        for strategy in [LayoutStrategy::Empty, LayoutStrategy::RandomColumn] {
            level
                .push_generated(&generator, strategy, &mut spawner, &mut rng)
                .expect("generation succeeds");
        }

        level.clear(&mut spawner);

        assert_eq!(level.section_count(), 0);
        assert_eq!(spawner.live_count(), 0);
        assert_eq!(spawner.released_total(), spawner.spawned_total());
        assert_eq!(level.cursor(), 4);
        assert_eq!(level.retire_oldest(&mut spawner), None);
    }
}
