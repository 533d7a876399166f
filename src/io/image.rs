//! PNG preview of stitched sections with transparent empty cells

use crate::io::configuration::PREVIEW_PIXELS_PER_TILE;
use crate::io::error::{LevelError, Result, invalid_parameter};
use crate::spatial::section::Section;
use crate::spatial::tiles::TileKind;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Preview colour of each tile kind, indexed by tile code
pub const TILE_PALETTE: [[u8; 4]; TileKind::ALL.len()] = [
    [0, 0, 0, 0],
    [40, 44, 52, 255],
    [200, 120, 40, 255],
    [60, 160, 220, 255],
    [90, 200, 90, 255],
    [150, 60, 60, 255],
    [230, 60, 200, 255],
    [250, 230, 70, 255],
    [240, 240, 240, 255],
    [80, 110, 250, 255],
    [160, 160, 180, 255],
];

#[derive(Debug)]
struct WorldBounds {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

// Smallest rectangle containing every cell of every section
fn calculate_world_bounds<'a>(
    sections: impl IntoIterator<Item = &'a Section>,
) -> Option<WorldBounds> {
    let mut bounds: Option<WorldBounds> = None;

    for emission in sections.into_iter().flat_map(Section::emissions) {
        let p = emission.position;
        bounds = Some(match bounds {
            None => WorldBounds {
                min_x: p.x,
                max_x: p.x,
                min_y: p.y,
                max_y: p.y,
            },
            Some(b) => WorldBounds {
                min_x: b.min_x.min(p.x),
                max_x: b.max_x.max(p.x),
                min_y: b.min_y.min(p.y),
                max_y: b.max_y.max(p.y),
            },
        });
    }

    bounds
}

/// Export sections as one PNG, highest world row at the top of the image
///
/// # Errors
///
/// Returns an error if:
/// - No sections were supplied
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_level_as_png<'a>(
    sections: impl IntoIterator<Item = &'a Section> + Clone,
    output_path: &Path,
) -> Result<()> {
    let bounds = calculate_world_bounds(sections.clone()).ok_or_else(|| {
        invalid_parameter("sections", &0, &"at least one section is required")
    })?;

    let scale = PREVIEW_PIXELS_PER_TILE;
    let width = (bounds.max_x - bounds.min_x + 1) as u32 * scale;
    let height = (bounds.max_y - bounds.min_y + 1) as u32 * scale;

    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for emission in sections.into_iter().flat_map(Section::emissions) {
        let rgba = TILE_PALETTE
            .get(emission.kind.code() as usize)
            .copied()
            .unwrap_or([0, 0, 0, 0]);
        let tile_x = (emission.position.x - bounds.min_x) as u32;
        let tile_y = (bounds.max_y - emission.position.y) as u32;

        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(tile_x * scale + dx, tile_y * scale + dy, Rgba(rgba));
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LevelError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| LevelError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
