//! CLI entry point for assembling maze levels

use clap::Parser;
use mazestack::io::cli::{Cli, LevelProcessor};

// Allow print for the final summary line
#[allow(clippy::print_stderr)]
fn main() -> mazestack::Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;
    let mut processor = LevelProcessor::new(cli);
    let summary = processor.process()?;

    if !quiet {
        let spawned: usize = summary.live_by_kind.iter().sum();
        eprintln!(
            "{} sections, {spawned} tiles, next section starts at y={}",
            summary.sections, summary.cursor
        );
    }
    Ok(())
}
