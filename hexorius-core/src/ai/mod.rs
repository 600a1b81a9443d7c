//! Computer players
//!
//! Three tiers share one contract: enumerate every legal move of the side
//! to move in board order, score it, then pick by a tier-specific rule.
//! - [`GreedyStrategy`]: immediate gain plus noise, random among the top 3
//! - [`LookaheadStrategy`]: positional score minus the opponent's best reply
//! - [`MinimaxStrategy`]: depth-limited minimax with alpha-beta pruning

mod greedy;
mod lookahead;
mod minimax;

pub use greedy::GreedyStrategy;
pub use lookahead::LookaheadStrategy;
pub use minimax::MinimaxStrategy;

use rand::Rng;

use crate::game::{GameState, Move};

/// Above this many pieces on the board the greedy and lookahead tiers
/// switch to endgame preferences
pub const ENDGAME_PIECES: usize = 20;

/// A computer player
pub trait AiStrategy {
    /// Display name of the tier
    fn title(&self) -> &'static str;

    /// Pick a move for the side to move, `None` iff it has no legal move.
    /// All randomness is drawn from `rng`.
    fn find_best_move<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<Move>;
}

/// Every strategy the game ships, dispatched exhaustively
#[derive(Clone, Debug)]
pub enum Strategy {
    Greedy(GreedyStrategy),
    Lookahead(LookaheadStrategy),
    Minimax(MinimaxStrategy),
}

impl AiStrategy for Strategy {
    fn title(&self) -> &'static str {
        match self {
            Strategy::Greedy(s) => s.title(),
            Strategy::Lookahead(s) => s.title(),
            Strategy::Minimax(s) => s.title(),
        }
    }

    fn find_best_move<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<Move> {
        match self {
            Strategy::Greedy(s) => s.find_best_move(state, rng),
            Strategy::Lookahead(s) => s.find_best_move(state, rng),
            Strategy::Minimax(s) => s.find_best_move(state, rng),
        }
    }
}

/// A candidate move with its ranking score
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: f64,
}

/// Whether the board is crowded enough for endgame play
pub fn is_endgame(state: &GameState) -> bool {
    state.piece_count() > ENDGAME_PIECES
}

/// Sort by score (descending, stable) and pick uniformly among the best `k`
fn pick_among_top<R: Rng + ?Sized>(
    mut candidates: Vec<ScoredMove>,
    k: usize,
    rng: &mut R,
) -> Option<Move> {
    if candidates.is_empty() {
        return None;
    }

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let pool = k.clamp(1, candidates.len());
    let index = if pool == 1 { 0 } else { rng.gen_range(0..pool) };
    Some(candidates[index].mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Hex;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scored(q: i8, score: f64) -> ScoredMove {
        ScoredMove {
            mv: Move::new(Hex::new(0, 0), Hex::new(q, 0)),
            score,
        }
    }

    #[test]
    fn test_pick_among_top_stays_in_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let candidates = vec![scored(1, 1.0), scored(2, 5.0), scored(3, 4.0), scored(-1, 0.5)];
        for _ in 0..50 {
            let mv = pick_among_top(candidates.clone(), 2, &mut rng).unwrap();
            assert!(mv.to == Hex::new(2, 0) || mv.to == Hex::new(3, 0));
        }
    }

    #[test]
    fn test_pick_among_top_small_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(pick_among_top(Vec::new(), 3, &mut rng), None);
        let only = vec![scored(1, -3.0)];
        assert_eq!(pick_among_top(only, 3, &mut rng), Some(Move::new(Hex::new(0, 0), Hex::new(1, 0))));
    }

    #[test]
    fn test_pick_top_one_is_stable() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let tied = vec![scored(1, 2.0), scored(2, 2.0), scored(3, 1.0)];
        assert_eq!(pick_among_top(tied, 1, &mut rng).unwrap().to, Hex::new(1, 0));
    }
}
