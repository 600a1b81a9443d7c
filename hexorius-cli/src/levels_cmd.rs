//! Levels command - list the built-in level catalog

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use hexorius_core::{board::cell_count, catalog, LevelConfig};

#[derive(Args)]
pub struct LevelsArgs {
    /// Output the catalog as JSON
    #[arg(long)]
    pub json: bool,

    /// Write each level to <DIR>/<slug>.json
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

pub fn run(args: LevelsArgs) -> Result<()> {
    let levels = catalog();

    if let Some(dir) = &args.export {
        export_levels(&levels, dir)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&levels)?);
    } else {
        print_table(&levels);
    }

    Ok(())
}

fn export_levels(levels: &[LevelConfig], dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    for level in levels {
        let path = dir.join(format!("{}.json", level.slug));
        level
            .save(&path)
            .with_context(|| format!("Failed to write level: {}", path.display()))?;
        tracing::info!("Saved level {} to {}", level.slug, path.display());
    }
    Ok(())
}

fn print_table(levels: &[LevelConfig]) {
    println!("{:<4} {:<20} {:<22} {:>6} {:>6} {:>5} {:>7}", "#", "slug", "name", "radius", "cells", "jump", "pieces");
    for (i, level) in levels.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:<22} {:>6} {:>6} {:>5} {:>7}",
            i + 1,
            level.slug,
            level.name,
            level.grid_radius,
            cell_count(level.grid_radius),
            level.max_jump_distance,
            level.starting_positions.player1.len(),
        );
    }
}
