//! HEXORIUS Core - Game engine and AI
//!
//! This crate provides the core game logic for HEXORIUS, a hex-grid
//! territory game where pieces duplicate or jump and convert adjacent
//! enemies:
//! - Board geometry (hex grid with axial coordinates, dense storage)
//! - Level configuration and the built-in level catalog
//! - Game state, move generation and move execution
//! - Position evaluation
//! - Three AI tiers (greedy, one-ply lookahead, minimax with alpha-beta)
//! - Difficulty registry and AI-vs-AI battles

pub mod board;
pub mod level;
pub mod game;
pub mod eval;
pub mod ai;
pub mod registry;
pub mod battle;
pub mod error;

// Re-exports for convenient access
pub use board::{Board, Hex, DIRECTIONS, MAX_RADIUS};
pub use level::{catalog, LevelConfig, StartingPositions};
pub use game::{GameResult, GameState, Move, Player, Scores};
pub use eval::{evaluate, Heuristics};
pub use ai::{AiStrategy, GreedyStrategy, LookaheadStrategy, MinimaxStrategy, ScoredMove, Strategy};
pub use registry::{Difficulty, StrategyRegistry};
pub use battle::{run_battle, BattleConfig, BattleSummary, GameOutcome};
pub use error::{GameError, Result};
