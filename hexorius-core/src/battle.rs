//! AI-vs-AI battles - repeated games between two difficulties on one level

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::AiStrategy;
use crate::error::Result;
use crate::game::{GameResult, GameState, Move, Player, Scores};
use crate::level::LevelConfig;
use crate::registry::{Difficulty, StrategyRegistry};

/// Battle configuration
#[derive(Clone, Debug)]
pub struct BattleConfig {
    /// Level every game starts from
    pub level: LevelConfig,
    /// Difficulty playing as player one
    pub first: Difficulty,
    /// Difficulty playing as player two
    pub second: Difficulty,
    /// Number of games
    pub games: usize,
    /// Games still running after this many moves are decided by score
    pub max_moves: u32,
    /// Game `i` uses seed `seed + i`
    pub seed: u64,
    /// Whether to run games in parallel
    pub parallel: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            level: LevelConfig::default(),
            first: Difficulty::Easy,
            second: Difficulty::Medium,
            games: 10,
            max_moves: 200,
            seed: 42,
            parallel: true,
        }
    }
}

impl BattleConfig {
    pub fn new(level: LevelConfig, first: Difficulty, second: Difficulty) -> Self {
        Self {
            level,
            first,
            second,
            ..Default::default()
        }
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Outcome of a single game
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Result by final piece count
    pub result: GameResult,
    pub scores: Scores,
    /// Moves played
    pub moves: u32,
    /// Whether the game was cut off by the move limit
    pub hit_move_limit: bool,
    pub history: Vec<Move>,
}

impl GameOutcome {
    /// Get winner (None for draw)
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            GameResult::Winner(player) => Some(player),
            GameResult::Draw | GameResult::Ongoing => None,
        }
    }
}

/// Aggregated battle results
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub first: Difficulty,
    pub second: Difficulty,
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
    pub avg_first_score: f32,
    pub avg_second_score: f32,
    pub avg_moves: f32,
    pub games: Vec<GameOutcome>,
}

impl BattleSummary {
    fn from_outcomes(first: Difficulty, second: Difficulty, games: Vec<GameOutcome>) -> Self {
        let mut first_wins = 0;
        let mut second_wins = 0;
        let mut draws = 0;
        for game in &games {
            match game.winner() {
                Some(Player::One) => first_wins += 1,
                Some(Player::Two) => second_wins += 1,
                None => draws += 1,
            }
        }

        let n = games.len().max(1) as f32;
        let avg = |f: fn(&GameOutcome) -> f32| games.iter().map(f).sum::<f32>() / n;

        Self {
            first,
            second,
            first_wins,
            second_wins,
            draws,
            avg_first_score: avg(|g| g.scores.one as f32),
            avg_second_score: avg(|g| g.scores.two as f32),
            avg_moves: avg(|g| g.moves as f32),
            games,
        }
    }

    pub fn games_played(&self) -> usize {
        self.games.len()
    }
}

/// Play one game to completion or to `max_moves`
pub fn play_game<A, B>(
    initial: GameState,
    first: &A,
    second: &B,
    max_moves: u32,
    rng: &mut ChaCha8Rng,
) -> GameOutcome
where
    A: AiStrategy,
    B: AiStrategy,
{
    let mut state = initial;
    let mut history = Vec::new();
    let mut hit_move_limit = false;

    loop {
        if history.len() as u32 >= max_moves {
            hit_move_limit = true;
            break;
        }

        let mv = match state.current_player() {
            Player::One => first.find_best_move(&state, rng),
            Player::Two => second.find_best_move(&state, rng),
        };
        let Some(mv) = mv else {
            break;
        };

        history.push(mv);
        state = state.apply_legal(mv);
    }

    GameOutcome {
        result: state.result_by_score(),
        scores: state.scores(),
        moves: history.len() as u32,
        hit_move_limit,
        history,
    }
}

/// Run every game of a battle
pub fn run_battle(config: &BattleConfig, registry: &StrategyRegistry) -> Result<BattleSummary> {
    let initial = GameState::new(&config.level)?;
    let first = registry.get(config.first);
    let second = registry.get(config.second);

    tracing::info!(
        "Starting battle on '{}': {} vs {} ({} games)",
        config.level.slug,
        first.title(),
        second.title(),
        config.games
    );

    let play = |index: usize| {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(index as u64));
        let outcome = play_game(initial.clone(), first, second, config.max_moves, &mut rng);
        tracing::info!(
            "Game {}: {:?} {}-{} ({} moves{})",
            index + 1,
            outcome.result,
            outcome.scores.one,
            outcome.scores.two,
            outcome.moves,
            if outcome.hit_move_limit { ", move limit" } else { "" }
        );
        outcome
    };

    let outcomes: Vec<GameOutcome> = if config.parallel {
        (0..config.games).into_par_iter().map(play).collect()
    } else {
        (0..config.games).map(play).collect()
    };

    Ok(BattleSummary::from_outcomes(config.first, config.second, outcomes))
}
