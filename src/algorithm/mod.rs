/// Section layout strategies
pub mod generator;
/// Cursor-driven level assembly and teardown
pub mod level;
/// Sparse powerup placement
pub mod overlay;
/// Explicit random sources for reproducible generation
pub mod random;
