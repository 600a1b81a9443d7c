//! Medium tier: positional scoring with a one-ply look at the reply

use rand::Rng;

use super::{is_endgame, pick_among_top, AiStrategy, ScoredMove};
use crate::eval::{center_proximity, evaluate, Heuristics};
use crate::game::{GameState, Move, Player};

/// Share of the opponent's best reply subtracted from a candidate
const REPLY_WEIGHT: f64 = 0.5;

/// Penalty per own piece adjacent to an opponent landing cell
const THREAT_PENALTY: f64 = 5.0;

/// Replaces the reply penalty when the opponent is left without a move
const SHUTOUT_BONUS: f64 = 1000.0;

// Early game preferences
const MOBILITY_BONUS: f64 = 2.0;
const CENTER_BONUS: f64 = 3.0;
const CENTER_ANCHOR: f64 = 3.0;
const DUPLICATION_BONUS: f64 = 4.0;

const JITTER: f64 = 0.1;

/// Scores each move by the resulting position, penalized by what the
/// opponent can do in return
#[derive(Clone, Debug)]
pub struct LookaheadStrategy {
    pub heuristics: Heuristics,
}

impl Default for LookaheadStrategy {
    fn default() -> Self {
        Self {
            heuristics: Heuristics::lookahead(),
        }
    }
}

impl LookaheadStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    fn pool_size(endgame: bool) -> usize {
        if endgame {
            1
        } else {
            2
        }
    }

    /// Score one candidate, without jitter
    fn score_move(&self, state: &GameState, mv: Move, endgame: bool) -> f64 {
        let mover = state.current_player();
        let opponent = mover.opponent();
        let next = state.apply_legal(mv);

        let mut score = evaluate(&next, mover, &self.heuristics);

        let mut best_reply: Option<f64> = None;
        let mut threats = 0usize;
        for reply in next.legal_moves() {
            let after = next.apply_legal(reply);
            let value = evaluate(&after, opponent, &self.heuristics);
            best_reply = Some(best_reply.map_or(value, |best| best.max(value)));
            threats += exposed_pieces(&next, reply, mover);
        }

        score -= threats as f64 * THREAT_PENALTY;
        match best_reply {
            Some(best) => score -= best * REPLY_WEIGHT,
            None => score += SHUTOUT_BONUS,
        }

        if !endgame {
            score += next.mobility_of(mv.to) as f64 * MOBILITY_BONUS;
            score += center_proximity(mv.to, CENTER_ANCHOR) * CENTER_BONUS;
            if mv.is_duplication() {
                score += DUPLICATION_BONUS;
            }
        }

        score
    }

    fn score_moves<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Vec<ScoredMove> {
        let endgame = is_endgame(state);
        state
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let score = self.score_move(state, mv, endgame) + rng.gen::<f64>() * JITTER;
                ScoredMove { mv, score }
            })
            .collect()
    }
}

/// `player`'s pieces next to the landing cell of `reply`
fn exposed_pieces(state: &GameState, reply: Move, player: Player) -> usize {
    reply
        .to
        .neighbors()
        .into_iter()
        .filter(|n| state.owner(*n) == Some(player))
        .count()
}

impl AiStrategy for LookaheadStrategy {
    fn title(&self) -> &'static str {
        "Medium"
    }

    fn find_best_move<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<Move> {
        let endgame = is_endgame(state);
        let candidates = self.score_moves(state, rng);
        tracing::debug!(
            "{} AI: {} candidates (endgame={})",
            self.title(),
            candidates.len(),
            endgame
        );
        pick_among_top(candidates, Self::pool_size(endgame), rng)
    }
}
