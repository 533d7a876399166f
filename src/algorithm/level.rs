//! Level assembly: a stitching cursor plus the queue of live sections
//!
//! Sections are appended above the cursor and retired from the bottom, so the
//! queue is always ordered by world height.

use log::debug;
use std::collections::{VecDeque, vec_deque};
use std::ops::Range;

use crate::algorithm::generator::{GridGenerator, LayoutStrategy};
use crate::algorithm::random::RandomSource;
use crate::io::blueprint;
use crate::io::error::Result;
use crate::io::spawn::TileSpawner;
use crate::spatial::grid::TileGrid;
use crate::spatial::section::{Section, SectionStitcher};

/// A vertically growing level built from stitched sections
#[derive(Debug)]
pub struct Level {
    stitcher: SectionStitcher,
    cursor: i32,
    sections: VecDeque<Section>,
}

impl Level {
    /// Create an empty level whose first section starts at `start_y`
    pub fn new(start_y: i32) -> Self {
        Self::with_stitcher(SectionStitcher::default(), start_y)
    }

    /// Create an empty level with a custom stitcher
    pub const fn with_stitcher(stitcher: SectionStitcher, start_y: i32) -> Self {
        Self {
            stitcher,
            cursor: start_y,
            sections: VecDeque::new(),
        }
    }

    /// World row the next section will start at
    pub const fn cursor(&self) -> i32 {
        self.cursor
    }

    /// Number of live sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Live sections from lowest to highest
    pub fn sections(&self) -> vec_deque::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Stitch a grid at the cursor, spawn its tiles and keep the section
    ///
    /// Returns the world rows the section covers. The cursor only moves once
    /// the section is fully spawned.
    ///
    /// # Errors
    ///
    /// Returns an error if stitching rejects the grid
    pub fn push_grid<S, R>(
        &mut self,
        grid: TileGrid,
        spawner: &mut S,
        rng: &mut R,
    ) -> Result<Range<i32>>
    where
        S: TileSpawner + ?Sized,
        R: RandomSource + ?Sized,
    {
        let (mut section, next_y) = self.stitcher.stitch(grid, self.cursor)?;
        section.instantiate(spawner, rng)?;
        let rows = self.cursor..next_y;
        self.cursor = next_y;
        self.sections.push_back(section);
        Ok(rows)
    }

    /// Generate, stitch and spawn one procedural section
    ///
    /// # Errors
    ///
    /// Returns an error if generation or stitching fails
    pub fn push_generated<S, R>(
        &mut self,
        generator: &GridGenerator,
        strategy: LayoutStrategy,
        spawner: &mut S,
        rng: &mut R,
    ) -> Result<Range<i32>>
    where
        S: TileSpawner + ?Sized,
        R: RandomSource + ?Sized,
    {
        let grid = generator.generate(strategy, rng)?;
        self.push_grid(grid, spawner, rng)
    }

    /// Parse, stitch and spawn one blueprint section
    ///
    /// # Errors
    ///
    /// Returns `MalformedBlueprint` for invalid text; the cursor is unchanged
    pub fn push_blueprint<S, R>(
        &mut self,
        text: &str,
        spawner: &mut S,
        rng: &mut R,
    ) -> Result<Range<i32>>
    where
        S: TileSpawner + ?Sized,
        R: RandomSource + ?Sized,
    {
        let grid = blueprint::parse(text)?;
        self.push_grid(grid, spawner, rng)
    }

    /// Destroy and drop the lowest section
    ///
    /// Returns the world rows it covered, `None` if the level is empty.
    pub fn retire_oldest<S: TileSpawner + ?Sized>(&mut self, spawner: &mut S) -> Option<Range<i32>> {
        let mut section = self.sections.pop_front()?;
        section.destroy(spawner);
        let rows = section.origin_y()..section.end_y();
        debug!("Retired section covering rows {rows:?}");
        Some(rows)
    }

    /// Destroy every section; the cursor keeps its position
    pub fn clear<S: TileSpawner + ?Sized>(&mut self, spawner: &mut S) {
        while self.retire_oldest(spawner).is_some() {}
    }
}
