//! Fixed-format text blueprints
//!
//! A blueprint is one line per grid row and one ASCII digit per cell, every
//! line the same length. Digit `d` becomes tile code `d`, so code 10 can only
//! come from procedural generation. Line 0 is grid row 0.

use log::{debug, warn};
use ndarray::Array2;
use std::path::{Path, PathBuf};

use crate::io::configuration::{BLUEPRINT_DIRECTORY, BLUEPRINT_EXTENSION, MAX_SECTION_WIDTH};
use crate::io::error::{LevelError, Result, malformed_blueprint};
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileCode;

/// Parse blueprint text into a grid
///
/// One trailing newline is ignored and `\r\n` endings are accepted.
///
/// # Errors
///
/// Returns `MalformedBlueprint` if:
/// - The text is empty or its first line is empty
/// - The first line is wider than a section may be
/// - Any line differs in length from the first
/// - Any character is not an ASCII digit
pub fn parse(text: &str) -> Result<TileGrid> {
    let body = text
        .strip_suffix('\n')
        .map_or(text, |t| t.strip_suffix('\r').unwrap_or(t));
    if body.is_empty() {
        return Err(malformed_blueprint(0, &"blueprint is empty"));
    }

    let lines: Vec<&[u8]> = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).as_bytes())
        .collect();

    let width = lines.first().map_or(0, |line| line.len());
    if width == 0 {
        return Err(malformed_blueprint(0, &"first row is empty"));
    }
    if width > MAX_SECTION_WIDTH {
        return Err(malformed_blueprint(
            0,
            &format!("row width {width} exceeds {MAX_SECTION_WIDTH}"),
        ));
    }

    let mut cells = Vec::with_capacity(width * lines.len());
    for (index, line) in lines.iter().enumerate() {
        if line.len() != width {
            return Err(malformed_blueprint(
                index,
                &format!("row has length {}, expected {width}", line.len()),
            ));
        }
        for (column, &byte) in line.iter().enumerate() {
            cells.push(digit_code(byte).ok_or_else(|| {
                malformed_blueprint(
                    index,
                    &format!("byte {byte:#04x} at column {column} is not a digit"),
                )
            })?);
        }
    }

    let height = lines.len();
    let array = Array2::from_shape_vec((height, width), cells)
        .map_err(|e| malformed_blueprint(0, &e))?;
    let grid = TileGrid::from_array(array)?;

    debug!("Parsed {width}x{height} blueprint");
    Ok(grid)
}

/// Tile code of an ASCII digit
pub const fn digit_code(byte: u8) -> Option<TileCode> {
    if byte.is_ascii_digit() {
        Some(byte - b'0')
    } else {
        None
    }
}

/// Location of a named blueprint below an asset root
pub fn blueprint_path(asset_root: &Path, name: &str) -> PathBuf {
    asset_root
        .join(BLUEPRINT_DIRECTORY)
        .join(format!("{name}.{BLUEPRINT_EXTENSION}"))
}

/// Read and parse a named blueprint
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and `MalformedBlueprint`
/// if its contents are invalid
pub fn load_blueprint(asset_root: &Path, name: &str) -> Result<TileGrid> {
    let path = blueprint_path(asset_root, name);
    let text = std::fs::read_to_string(&path).map_err(|e| LevelError::FileSystem {
        path: path.clone(),
        operation: "read blueprint",
        source: e,
    })?;

    parse(&text).inspect_err(|e| warn!("Blueprint '{}' rejected: {e}", path.display()))
}
