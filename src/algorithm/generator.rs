//! Procedural section layouts
//!
//! Each strategy builds its wall layout from a zero-filled grid, then the
//! powerup overlay runs once over the interior before the grid is handed out.

use clap::ValueEnum;
use log::debug;

use crate::algorithm::overlay::populate;
use crate::algorithm::random::RandomSource;
use crate::io::configuration::{EXTRA_COLUMN_COUNT, WALL_CHANCE};
use crate::io::error::Result;
use crate::spatial::grid::{TileGrid, validate_dimensions};
use crate::spatial::tiles::TileKind;

/// Wall layout used for a generated section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum LayoutStrategy {
    /// Side walls only
    #[value(name = "empty")]
    Empty,
    /// Side walls plus independently scattered interior walls
    #[value(name = "normal")]
    RandomNormal,
    /// Side walls plus full-height interior columns
    #[value(name = "column")]
    RandomColumn,
}

impl LayoutStrategy {
    /// Short name used in logs and on the command line
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::RandomNormal => "normal",
            Self::RandomColumn => "column",
        }
    }
}

/// Generator for sections of a fixed size
#[derive(Debug, Clone, Copy)]
pub struct GridGenerator {
    width: usize,
    height: usize,
}

impl GridGenerator {
    /// Create a generator after validating the section size
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or the width
    /// exceeds the byte-addressable maximum
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self { width, height })
    }

    /// Section width in tiles
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Section height in tiles
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Build one finished section grid
    ///
    /// # Errors
    ///
    /// Only fails if the stored dimensions are rejected by the grid, which
    /// [`GridGenerator::new`] already rules out
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        strategy: LayoutStrategy,
        rng: &mut R,
    ) -> Result<TileGrid> {
        let mut grid = self.layout(strategy, rng)?;
        let powerups = populate(&mut grid, rng);

        debug!(
            "Generated {} section {}x{} with {} walls and {powerups} powerups",
            strategy.label(),
            self.width,
            self.height,
            grid.count(TileKind::Wall),
        );

        Ok(grid)
    }

    /// Build the wall layout without the powerup overlay
    ///
    /// # Errors
    ///
    /// Only fails if the stored dimensions are rejected by the grid
    pub fn layout<R: RandomSource + ?Sized>(
        &self,
        strategy: LayoutStrategy,
        rng: &mut R,
    ) -> Result<TileGrid> {
        let mut grid = TileGrid::empty(self.width, self.height)?;
        match strategy {
            LayoutStrategy::Empty => enclose(&mut grid),
            LayoutStrategy::RandomNormal => {
                enclose(&mut grid);
                scatter_walls(&mut grid, rng);
            }
            LayoutStrategy::RandomColumn => {
                enclose(&mut grid);
                raise_columns(&mut grid, rng);
            }
        }
        Ok(grid)
    }
}

/// Generate a section in one call
///
/// # Errors
///
/// Returns `InvalidDimensions` before allocating if the size is unusable
pub fn generate<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    strategy: LayoutStrategy,
    rng: &mut R,
) -> Result<TileGrid> {
    GridGenerator::new(width, height)?.generate(strategy, rng)
}

/// Wall off the first and last column
pub fn enclose(grid: &mut TileGrid) {
    let last = grid.width() - 1;
    grid.fill_column(0, TileKind::Wall);
    grid.fill_column(last, TileKind::Wall);
}

/// One Bernoulli draw per interior cell, row by row
fn scatter_walls<R: RandomSource + ?Sized>(grid: &mut TileGrid, rng: &mut R) {
    let interior_end = grid.width().saturating_sub(1);
    for row in 0..grid.height() {
        for column in 1..interior_end {
            if rng.next_float() < WALL_CHANCE {
                if let Some(cell) = grid.get_mut(column, row) {
                    *cell = TileKind::Wall.code();
                }
            }
        }
    }
}

/// Raise [`EXTRA_COLUMN_COUNT`] interior columns
///
/// Columns are drawn from `[1, width - 2]` with replacement; repeats simply
/// rewrite the same column. Sections narrower than three tiles have no
/// interior and get no extra columns.
fn raise_columns<R: RandomSource + ?Sized>(grid: &mut TileGrid, rng: &mut R) {
    for _ in 0..EXTRA_COLUMN_COUNT {
        if let Some(column) = interior_column(grid.width(), rng) {
            grid.fill_column(column, TileKind::Wall);
        }
    }
}

/// Uniform interior column index, `None` when the section has no interior
pub fn interior_column<R: RandomSource + ?Sized>(width: usize, rng: &mut R) -> Option<usize> {
    if width < 3 {
        return None;
    }
    // width <= MAX_SECTION_WIDTH, so the bounds fit in i32
    let high = (width - 1) as i32;
    let column = rng.next_int_range(1, high);
    Some(column.clamp(1, high - 1) as usize)
}
