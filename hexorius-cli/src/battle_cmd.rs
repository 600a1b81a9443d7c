//! Battle command - play AI-vs-AI games on one level
//!
//! - run(): orchestration
//! - resolve_battle(): level + difficulties from arguments
//! - report_results(): text or JSON output

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexorius_core::{
    run_battle, BattleConfig, BattleSummary, Difficulty, LevelConfig, MinimaxStrategy,
    StrategyRegistry,
};

#[derive(Args)]
pub struct BattleArgs {
    /// Built-in level slug
    #[arg(long, default_value = "first-steps")]
    pub level: String,

    /// Level JSON file (overrides --level)
    #[arg(long, value_name = "FILE")]
    pub level_file: Option<PathBuf>,

    /// Difficulty of player one (easy, medium, hard)
    #[arg(long, default_value = "easy")]
    pub first: String,

    /// Difficulty of player two (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    pub second: String,

    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Moves before a game is decided by score
    #[arg(long, default_value = "200")]
    pub max_moves: u32,

    /// Search depth of the hard AI
    #[arg(long)]
    pub hard_depth: Option<u32>,

    /// Run games in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

pub fn run(args: BattleArgs, seed: u64) -> Result<()> {
    let config = resolve_battle(&args, seed)?;

    let mut registry = StrategyRegistry::new();
    if let Some(depth) = args.hard_depth {
        registry = registry.with_hard(MinimaxStrategy::new().with_depth(depth));
    }

    let summary = run_battle(&config, &registry)?;
    report_results(&summary, &config, args.json)
}

// ============================================================================
// PHASES
// ============================================================================

fn resolve_battle(args: &BattleArgs, seed: u64) -> Result<BattleConfig> {
    let level = match &args.level_file {
        Some(path) => LevelConfig::load(path)?,
        None => LevelConfig::by_slug(&args.level)?,
    };

    let first: Difficulty = args
        .first
        .parse()
        .with_context(|| "Invalid --first difficulty")?;
    let second: Difficulty = args
        .second
        .parse()
        .with_context(|| "Invalid --second difficulty")?;

    Ok(BattleConfig::new(level, first, second)
        .with_games(args.games)
        .with_max_moves(args.max_moves)
        .with_seed(seed)
        .with_parallel(args.parallel))
}

fn report_results(summary: &BattleSummary, config: &BattleConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print_text_results(summary, config);
    }
    Ok(())
}

// ============================================================================
// UTILITIES
// ============================================================================

fn percent(count: u32, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_text_results(summary: &BattleSummary, config: &BattleConfig) {
    let total = summary.games_played();

    println!("\n=== Battle Results: {} ===", config.level.name);
    println!("Total games:  {}", total);
    println!(
        "{:<7} wins: {} ({:.1}%)",
        summary.first,
        summary.first_wins,
        percent(summary.first_wins, total)
    );
    println!(
        "{:<7} wins: {} ({:.1}%)",
        summary.second,
        summary.second_wins,
        percent(summary.second_wins, total)
    );
    println!("Draws:        {} ({:.1}%)", summary.draws, percent(summary.draws, total));
    println!(
        "Avg score:    {} {:.1} - {:.1} {}",
        summary.first, summary.avg_first_score, summary.avg_second_score, summary.second
    );
    println!("Avg moves:    {:.1}", summary.avg_moves);

    println!("\nGame details:");
    for (i, game) in summary.games.iter().enumerate() {
        println!(
            "  Game {}: {:?} {}-{} in {} moves{}",
            i + 1,
            game.result,
            game.scores.one,
            game.scores.two,
            game.moves,
            if game.hit_move_limit { " (move limit)" } else { "" }
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
