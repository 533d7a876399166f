//! Stitching grids into world space and tracking what they spawned
//!
//! Grid row `y` of a section stitched at cursor `start_y` lands on world row
//! `start_y + y`, and column `x` lands on `x - width / 2`. The returned cursor
//! is `start_y + height`, so chained sections never overlap or leave gaps.

use log::{debug, trace};

use crate::algorithm::random::RandomSource;
use crate::io::configuration::TILE_DEPTH;
use crate::io::error::{ErrorContext, Result, WithContext, invalid_dimensions, invalid_parameter};
use crate::io::spawn::{SpawnRequest, TileHandle, TileSpawner};
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileKind;

/// Integer world coordinate of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldPosition {
    /// Horizontal coordinate, 0 at the section's centre column
    pub x: i32,
    /// Vertical coordinate, grows with each stitched row
    pub y: i32,
    /// Depth layer chosen by the stitcher's caller
    pub z: i32,
}

/// One cell of a stitched section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileEmission {
    /// Validated tile kind, `Empty` included
    pub kind: TileKind,
    /// World position of the cell
    pub position: WorldPosition,
}

/// Lifecycle of a section's spawned tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// Stitched, nothing spawned yet
    Stitched,
    /// Tiles spawned and owned by the section
    Spawned,
    /// Tiles released; the section is spent
    Destroyed,
}

/// One slab of the level placed in world space
#[derive(Debug)]
pub struct Section {
    grid: TileGrid,
    origin_y: i32,
    emissions: Vec<TileEmission>,
    handles: Vec<TileHandle>,
    state: SectionState,
}

impl Section {
    /// Grid the section was stitched from
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// World row of grid row 0
    pub const fn origin_y(&self) -> i32 {
        self.origin_y
    }

    /// First world row after the section
    pub fn end_y(&self) -> i32 {
        // Stitching already proved this fits in i32
        self.origin_y + self.grid.height() as i32
    }

    /// Every cell in row-major order, bottom row first
    pub fn emissions(&self) -> &[TileEmission] {
        &self.emissions
    }

    /// Handles of tiles currently owned by the section
    pub fn handles(&self) -> &[TileHandle] {
        &self.handles
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SectionState {
        self.state
    }

    /// Spawn every non-empty cell in emission order
    ///
    /// Returns the number of tiles spawned.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the section was already spawned or destroyed
    pub fn instantiate<S, R>(&mut self, spawner: &mut S, rng: &mut R) -> Result<usize>
    where
        S: TileSpawner + ?Sized,
        R: RandomSource + ?Sized,
    {
        if self.state != SectionState::Stitched {
            return Err(invalid_parameter(
                "section",
                &format!("{:?}", self.state),
                &"only freshly stitched sections can be instantiated",
            ));
        }

        for emission in self.emissions.iter().filter(|e| e.kind.is_spawnable()) {
            let request = SpawnRequest::new(emission.kind, emission.position, rng);
            self.handles.push(spawner.spawn(&request));
        }
        self.state = SectionState::Spawned;

        debug!(
            "Spawned {} tiles for section at y={}",
            self.handles.len(),
            self.origin_y
        );
        Ok(self.handles.len())
    }

    /// Release every spawned tile and mark the section spent
    ///
    /// Calling this again is a no-op.
    pub fn destroy<S: TileSpawner + ?Sized>(&mut self, spawner: &mut S) {
        if self.state == SectionState::Destroyed {
            return;
        }
        trace!(
            "Releasing {} tiles of section at y={}",
            self.handles.len(),
            self.origin_y
        );
        for handle in self.handles.drain(..) {
            spawner.release(handle);
        }
        self.state = SectionState::Destroyed;
    }
}

/// Maps grids onto consecutive world rows
#[derive(Debug, Clone, Copy)]
pub struct SectionStitcher {
    depth: i32,
}

impl Default for SectionStitcher {
    fn default() -> Self {
        Self::new(TILE_DEPTH)
    }
}

impl SectionStitcher {
    /// Create a stitcher placing tiles on the given depth layer
    pub const fn new(depth: i32) -> Self {
        Self { depth }
    }

    /// Depth layer of emitted tiles
    pub const fn depth(&self) -> i32 {
        self.depth
    }

    /// Place a grid starting at world row `start_y`
    ///
    /// Returns the section and the cursor for the next section.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTileCode` for any cell outside the tile enumeration and
    /// `InvalidDimensions` if the section would run past `i32::MAX`
    pub fn stitch(&self, grid: TileGrid, start_y: i32) -> Result<(Section, i32)> {
        let width = grid.width();
        let height = grid.height();

        let next_y = i32::try_from(height)
            .ok()
            .and_then(|h| start_y.checked_add(h))
            .ok_or_else(|| {
                invalid_dimensions(width, height, &format!("section overflows cursor {start_y}"))
            })?;

        // Truncating division: even widths reach one cell further left than right
        let half_width = (width / 2) as i32;
        let mut emissions = Vec::with_capacity(width * height);

        for (column, row, code) in grid.cells() {
            let kind = TileKind::try_from(code).with_context(ErrorContext {
                grid_position: Some([column, row]),
            })?;
            emissions.push(TileEmission {
                kind,
                position: WorldPosition {
                    x: column as i32 - half_width,
                    y: start_y + row as i32,
                    z: self.depth,
                },
            });
        }

        debug!("Stitched {width}x{height} section over rows [{start_y}, {next_y})");

        let section = Section {
            grid,
            origin_y: start_y,
            emissions,
            handles: Vec::new(),
            state: SectionState::Stitched,
        };
        Ok((section, next_y))
    }
}

/// Stitch with the default depth layer
///
/// # Errors
///
/// See [`SectionStitcher::stitch`]
pub fn stitch(grid: TileGrid, start_y: i32) -> Result<(Section, i32)> {
    SectionStitcher::default().stitch(grid, start_y)
}
