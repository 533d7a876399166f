//! Command-line interface for assembling and previewing a level

use crate::algorithm::generator::{GridGenerator, LayoutStrategy};
use crate::algorithm::level::Level;
use crate::algorithm::random::SeededRandom;
use crate::io::blueprint::load_blueprint;
use crate::io::configuration::{
    DEFAULT_SECTION_COUNT, DEFAULT_SECTION_HEIGHT, DEFAULT_SECTION_WIDTH, DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_level_as_png;
use crate::io::progress::ProgressManager;
use crate::io::spawn::SpawnLedger;
use crate::spatial::tiles::TileKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mazestack")]
#[command(
    version,
    about = "Assemble a vertical maze level from generated and blueprint sections"
)]
/// Command-line arguments for the level assembly tool
pub struct Cli {
    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Width of generated sections in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_SECTION_WIDTH)]
    pub width: usize,

    /// Height of generated sections in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_SECTION_HEIGHT)]
    pub height: usize,

    /// Number of generated sections
    #[arg(short = 'n', long, default_value_t = DEFAULT_SECTION_COUNT)]
    pub sections: usize,

    /// Layouts cycled through for generated sections
    #[arg(
        short = 'l',
        long = "layout",
        value_enum,
        value_delimiter = ',',
        default_values_t = [LayoutStrategy::Empty, LayoutStrategy::RandomNormal, LayoutStrategy::RandomColumn]
    )]
    pub layouts: Vec<LayoutStrategy>,

    /// Named blueprints stacked after the generated sections
    #[arg(short, long = "blueprint", value_delimiter = ',')]
    pub blueprints: Vec<String>,

    /// Asset root containing the blueprint directory
    #[arg(short, long, default_value = ".")]
    pub assets: PathBuf,

    /// World row the first section starts at
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start_y: i32,

    /// Write a PNG preview of the level
    #[arg(short, long, value_name = "PNG")]
    pub preview: Option<PathBuf>,

    /// Suppress progress and section output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Total number of sections the level will contain
    pub fn total_sections(&self) -> usize {
        self.sections + self.blueprints.len()
    }
}

/// Where one section of the plan comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSource {
    /// Procedurally generated with a layout
    Generated(LayoutStrategy),
    /// Loaded from a named blueprint
    Blueprint(String),
}

impl SectionSource {
    /// Short description for progress output
    pub fn label(&self) -> String {
        match self {
            Self::Generated(strategy) => format!("generated ({})", strategy.label()),
            Self::Blueprint(name) => format!("blueprint '{name}'"),
        }
    }
}

/// Outcome of assembling a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    /// Sections stitched
    pub sections: usize,
    /// Cursor after the last section
    pub cursor: i32,
    /// Tiles alive after assembly, indexed by tile code
    pub live_by_kind: [usize; TileKind::ALL.len()],
}

/// Builds a level from command-line arguments
pub struct LevelProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LevelProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.total_sections()));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Ordered list of section sources
    ///
    /// Generated sections cycle through the layouts, blueprints follow.
    ///
    /// # Errors
    ///
    /// Returns an error if sections are requested but no layout is given
    pub fn plan(&self) -> Result<Vec<SectionSource>> {
        if self.cli.sections > 0 && self.cli.layouts.is_empty() {
            return Err(invalid_parameter(
                "layout",
                &"",
                &"at least one layout is needed for generated sections",
            ));
        }

        let generated = self
            .cli
            .layouts
            .iter()
            .cycle()
            .take(self.cli.sections)
            .map(|&strategy| SectionSource::Generated(strategy));
        let blueprints = self
            .cli
            .blueprints
            .iter()
            .map(|name| SectionSource::Blueprint(name.clone()));

        Ok(generated.chain(blueprints).collect())
    }

    /// Assemble the level, print it and optionally export a preview
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid, a blueprint cannot be
    /// loaded, or the preview cannot be written
    // Allow print for user-facing section output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<LevelSummary> {
        let plan = self.plan()?;
        let generator = GridGenerator::new(self.cli.width, self.cli.height)?;
        let mut rng = SeededRandom::new(self.cli.seed);
        let mut spawner = SpawnLedger::new();
        let mut level = Level::new(self.cli.start_y);

        for source in &plan {
            if let Some(ref pm) = self.progress_manager {
                pm.start_section(&source.label());
            }

            let before = spawner.live_count();
            let rows = match source {
                SectionSource::Generated(strategy) => {
                    level.push_generated(&generator, *strategy, &mut spawner, &mut rng)?
                }
                SectionSource::Blueprint(name) => {
                    let grid = load_blueprint(&self.cli.assets, name)?;
                    level.push_grid(grid, &mut spawner, &mut rng)?
                }
            };

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_section(spawner.live_count() - before);
            }

            if !self.cli.quiet {
                if let Some(section) = level.sections().last() {
                    println!("{} rows {rows:?}", source.label());
                    println!("{}\n", section.grid());
                }
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if let Some(ref preview) = self.cli.preview {
            export_level_as_png(level.sections(), preview)?;
        }

        Ok(LevelSummary {
            sections: level.section_count(),
            cursor: level.cursor(),
            live_by_kind: spawner.live_counts_by_kind(),
        })
    }
}
