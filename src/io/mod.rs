/// Digit blueprint parsing and loading
pub mod blueprint;
/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG level previews
pub mod image;
/// Progress display
pub mod progress;
/// Tile spawning boundary
pub mod spawn;
