//! Hard tier: depth-limited minimax with alpha-beta pruning

use rand::Rng;

use super::{AiStrategy, ScoredMove};
use crate::eval::{evaluate, Heuristics};
use crate::game::{GameState, Move, Player};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Plies searched, counting the root move
pub const DEFAULT_DEPTH: u32 = 3;

// ============================================================================
// MINIMAX AI
// ============================================================================

/// Minimax player.
///
/// Scores are always from the point of view of one seat: the side to move
/// at the root unless a fixed seat is configured. Nodes where the seat is
/// to move maximize, the others minimize. The search is deterministic and
/// never touches `rng`.
#[derive(Clone, Debug)]
pub struct MinimaxStrategy {
    pub depth: u32,
    pub seat: Option<Player>,
    pub pruning: bool,
    pub heuristics: Heuristics,
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seat: None,
            pruning: true,
            heuristics: Heuristics::minimax(),
        }
    }
}

impl MinimaxStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of plies searched (at least 1)
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.max(1);
        self
    }

    /// Always evaluate for `seat`, whoever is to move
    pub fn with_seat(mut self, seat: Player) -> Self {
        self.seat = Some(seat);
        self
    }

    /// Enable or disable alpha-beta cutoffs
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    fn seat_for(&self, state: &GameState) -> Player {
        self.seat.unwrap_or_else(|| state.current_player())
    }

    /// Exact minimax value of every root move, in board order
    pub fn score_moves(&self, state: &GameState) -> Vec<ScoredMove> {
        let seat = self.seat_for(state);
        state
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let child = state.apply_legal(mv);
                let score = self.minimax(
                    &child,
                    self.depth.saturating_sub(1),
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    seat,
                );
                ScoredMove { mv, score }
            })
            .collect()
    }

    /// Best root move for the side to move, first in board order on ties.
    /// When the side to move is not the seat it picks the lowest score.
    pub fn best_scored_move(&self, state: &GameState) -> Option<ScoredMove> {
        let maximizing = state.current_player() == self.seat_for(state);
        let mut best: Option<ScoredMove> = None;

        for candidate in self.score_moves(state) {
            let better = match best {
                None => true,
                Some(b) if maximizing => candidate.score > b.score,
                Some(b) => candidate.score < b.score,
            };
            if better {
                best = Some(candidate);
            }
        }

        best
    }

    fn minimax(&self, state: &GameState, depth: u32, mut alpha: f64, mut beta: f64, seat: Player) -> f64 {
        if depth == 0 {
            return evaluate(state, seat, &self.heuristics);
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return evaluate(state, seat, &self.heuristics);
        }

        let maximizing = state.current_player() == seat;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            let child = state.apply_legal(mv);
            let score = self.minimax(&child, depth - 1, alpha, beta, seat);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        best
    }
}

impl AiStrategy for MinimaxStrategy {
    fn title(&self) -> &'static str {
        "Hard"
    }

    fn find_best_move<R: Rng + ?Sized>(&self, state: &GameState, _rng: &mut R) -> Option<Move> {
        let best = self.best_scored_move(state)?;
        tracing::debug!(
            "{} AI: depth {} picked {:?} (score {:.2})",
            self.title(),
            self.depth,
            best.mv,
            best.score
        );
        Some(best.mv)
    }
}

// ============================================================================
// TESTS
// ============================================================================
