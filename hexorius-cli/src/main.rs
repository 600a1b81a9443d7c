//! HEXORIUS CLI - Command-line interface
//!
//! Commands:
//! - levels: List the built-in levels
//! - battle: Play AI-vs-AI games on a level

mod battle_cmd;
mod levels_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexorius")]
#[command(about = "HEXORIUS hex territory game - levels and AI battles")]
struct Cli {
    /// Random seed for reproducible battles
    #[arg(long, global = true, default_value = "42")]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in levels
    Levels(levels_cmd::LevelsArgs),
    /// Play AI-vs-AI games
    Battle(battle_cmd::BattleArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Levels(args) => levels_cmd::run(args),
        Commands::Battle(args) => battle_cmd::run(args, cli.seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_battle() {
        let cli = Cli::try_parse_from([
            "hexorius", "battle", "--level", "triple-threat", "--first", "medium",
            "--second", "hard", "--games", "3", "--seed", "7",
        ])
        .unwrap();
        assert_eq!(cli.seed, 7);
        match cli.command {
            Commands::Battle(args) => {
                assert_eq!(args.level, "triple-threat");
                assert_eq!(args.first, "medium");
                assert_eq!(args.second, "hard");
                assert_eq!(args.games, 3);
                assert_eq!(args.max_moves, 200);
            }
            Commands::Levels(_) => panic!("expected battle"),
        }
    }

    #[test]
    fn test_parse_levels() {
        let cli = Cli::try_parse_from(["hexorius", "levels", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Levels(args) if args.json));
    }
}
