//! Generation constants and runtime configuration defaults

// Layout generation
/// Probability that an interior cell becomes a wall in the normal layout
pub const WALL_CHANCE: f32 = 0.20;
/// Number of interior columns raised in the column layout
pub const EXTRA_COLUMN_COUNT: usize = 3;

// Sections are addressed with a single byte horizontally
/// Maximum allowed section width
pub const MAX_SECTION_WIDTH: usize = 255;

/// Depth layer every emitted tile is placed on
pub const TILE_DEPTH: i32 = 0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default section width in tiles
pub const DEFAULT_SECTION_WIDTH: usize = 9;
/// Default section height in tiles
pub const DEFAULT_SECTION_HEIGHT: usize = 16;
/// Default number of sections assembled by the command-line tool
pub const DEFAULT_SECTION_COUNT: usize = 4;

// Blueprint assets
/// Directory blueprints are loaded from, relative to the asset root
pub const BLUEPRINT_DIRECTORY: &str = "Blueprints";
/// File extension of blueprint assets
pub const BLUEPRINT_EXTENSION: &str = "txt";

// Output settings
/// Edge length of one tile in preview images
pub const PREVIEW_PIXELS_PER_TILE: u32 = 4;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
