//! Spatial data structures shared by generation and stitching
//!
//! This module contains spatial-related functionality including:
//! - The tile grid produced by generators and the blueprint parser
//! - The closed tile enumeration
//! - Stitching of grids into world-space sections

/// Tile grid storage and dimension validation
pub mod grid;
/// World-space sections and the stitcher
pub mod section;
/// Tile codes and kinds
pub mod tiles;

pub use grid::TileGrid;
pub use section::{Section, SectionStitcher};
