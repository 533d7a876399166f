//! Rectangular tile grid owned by whichever component produced it
//!
//! Cells are stored row-major in an `ndarray` matrix indexed `[row, col]`.
//! Row 0 is the first row stitched, i.e. the lowest row in world space.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::MAX_SECTION_WIDTH;
use crate::io::error::{Result, invalid_dimensions};
use crate::spatial::tiles::{TileCode, TileKind};

/// Grid of tile codes for a single section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<TileCode>,
}

impl TileGrid {
    /// Create a grid of empty tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or the width
    /// exceeds [`MAX_SECTION_WIDTH`]
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            cells: Array2::zeros((height, width)),
        })
    }

    /// Wrap an existing `[row, col]` matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the matrix shape is unusable
    pub fn from_array(cells: Array2<TileCode>) -> Result<Self> {
        let (height, width) = cells.dim();
        validate_dimensions(width, height)?;
        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Code stored at a cell, `None` outside the grid
    pub fn get(&self, column: usize, row: usize) -> Option<TileCode> {
        self.cells.get([row, column]).copied()
    }

    /// Mutable access to a cell, `None` outside the grid
    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut TileCode> {
        self.cells.get_mut([row, column])
    }

    /// Set every cell of a column to `kind`
    ///
    /// Returns `false` without touching the grid when the column does not exist.
    pub fn fill_column(&mut self, column: usize, kind: TileKind) -> bool {
        if column >= self.width() {
            return false;
        }
        self.cells.column_mut(column).fill(kind.code());
        true
    }

    /// Iterate cells row by row as `(column, row, code)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileCode)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, column), &code)| (column, row, code))
    }

    /// Number of cells holding `kind`
    pub fn count(&self, kind: TileKind) -> usize {
        let code = kind.code();
        self.cells.iter().filter(|&&c| c == code).count()
    }

    /// Underlying `[row, col]` matrix
    pub const fn as_array(&self) -> &Array2<TileCode> {
        &self.cells
    }
}

// One base-36 digit per cell so codes 0..=9 print exactly as blueprint text
impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &code in row {
                let glyph = char::from_digit(u32::from(code), 36).unwrap_or('?');
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

/// Reject dimensions no section can have
///
/// # Errors
///
/// Returns `InvalidDimensions` if either dimension is zero or the width
/// exceeds [`MAX_SECTION_WIDTH`]
pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_dimensions(
            width,
            height,
            &"width and height must be positive",
        ));
    }
    if width > MAX_SECTION_WIDTH {
        return Err(invalid_dimensions(
            width,
            height,
            &format!("width may not exceed {MAX_SECTION_WIDTH}"),
        ));
    }
    Ok(())
}
