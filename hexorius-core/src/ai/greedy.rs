//! Easy tier: one-move greedy play with noise

use rand::Rng;

use super::{is_endgame, pick_among_top, AiStrategy, ScoredMove};
use crate::game::{GameState, Move};

/// Weight per piece gained by the move (captures plus duplication)
const GAIN_WEIGHT: f64 = 10.0;

/// Bonus for duplicating instead of jumping before the endgame
const DUPLICATION_BONUS: f64 = 2.0;

/// Scores each move by its immediate piece gain and picks at random among
/// the best few
#[derive(Clone, Debug)]
pub struct GreedyStrategy {
    /// Size of the pool the final pick is drawn from
    pub top_k: usize,
}

impl Default for GreedyStrategy {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

impl GreedyStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    fn score_moves<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Vec<ScoredMove> {
        let mover = state.current_player();
        let before = state.scores().of(mover) as f64;
        let endgame = is_endgame(state);

        state
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let after = state.apply_legal(mv).scores().of(mover) as f64;
                let mut score = (after - before) * GAIN_WEIGHT;
                if mv.is_duplication() && !endgame {
                    score += DUPLICATION_BONUS;
                }
                score += rng.gen::<f64>();
                ScoredMove { mv, score }
            })
            .collect()
    }
}

impl AiStrategy for GreedyStrategy {
    fn title(&self) -> &'static str {
        "Easy"
    }

    fn find_best_move<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<Move> {
        let candidates = self.score_moves(state, rng);
        tracing::debug!(
            "{} AI: {} candidates (endgame={})",
            self.title(),
            candidates.len(),
            is_endgame(state)
        );
        pick_among_top(candidates, self.top_k, rng)
    }
}
