//! Procedural maze sections stitched into a vertically scrolling level
//!
//! Sections are produced either by layout generators with a sparse powerup
//! overlay or by parsing digit blueprints. The stitcher maps each grid onto
//! consecutive world rows and hands spawn requests to an external spawner.

#![forbid(unsafe_code)]

/// Layout generation, powerup overlay, random sources and level assembly
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile grids, tile kinds and world-space sections
pub mod spatial;

pub use io::error::{LevelError, Result};
