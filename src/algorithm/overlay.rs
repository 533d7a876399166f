//! Sparse powerup placement over a finished layout
//!
//! Every interior cell draws one sample. Samples landing in one of the
//! hundredth-wide bands at the top of the unit interval replace the cell with
//! that band's tile; everything else leaves the cell untouched.

use crate::algorithm::random::RandomSource;
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileKind;

/// Half-open sample interval mapped to a tile kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerupBand {
    /// Inclusive lower bound
    pub low: f32,
    /// Exclusive upper bound
    pub high: f32,
    /// Tile placed when the sample falls inside
    pub kind: TileKind,
}

// [0.95, 0.96) is deliberately unassigned
/// Sample bands in ascending order
pub const POWERUP_BANDS: [PowerupBand; 9] = [
    PowerupBand {
        low: 0.90,
        high: 0.91,
        kind: TileKind::Resistance,
    },
    PowerupBand {
        low: 0.91,
        high: 0.92,
        kind: TileKind::Coil,
    },
    PowerupBand {
        low: 0.92,
        high: 0.93,
        kind: TileKind::Battery,
    },
    PowerupBand {
        low: 0.93,
        high: 0.94,
        kind: TileKind::BrokenCircuitry,
    },
    PowerupBand {
        low: 0.94,
        high: 0.95,
        kind: TileKind::PositronSpawner,
    },
    PowerupBand {
        low: 0.96,
        high: 0.97,
        kind: TileKind::BeamTrigger,
    },
    PowerupBand {
        low: 0.97,
        high: 0.98,
        kind: TileKind::Led,
    },
    PowerupBand {
        low: 0.98,
        high: 0.99,
        kind: TileKind::Shield,
    },
    PowerupBand {
        low: 0.99,
        high: 1.00,
        kind: TileKind::GhostTrigger,
    },
];

/// Tile assigned to a sample, `None` when no band contains it
pub fn powerup_for_sample(sample: f32) -> Option<TileKind> {
    POWERUP_BANDS
        .iter()
        .find(|band| band.low <= sample && sample < band.high)
        .map(|band| band.kind)
}

/// Overlay powerups on every interior cell, column by column
///
/// The two enclosing columns are never touched. Returns the number of cells
/// that received a powerup.
pub fn populate<R: RandomSource + ?Sized>(grid: &mut TileGrid, rng: &mut R) -> usize {
    let mut placed = 0;
    let interior_end = grid.width().saturating_sub(1);

    for column in 1..interior_end {
        for row in 0..grid.height() {
            let Some(kind) = powerup_for_sample(rng.next_float()) else {
                continue;
            };
            if let Some(cell) = grid.get_mut(column, row) {
                *cell = kind.code();
                placed += 1;
            }
        }
    }

    placed
}
