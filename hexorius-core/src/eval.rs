//! Position evaluation

use serde::{Deserialize, Serialize};

use crate::board::Hex;
use crate::game::{GameState, Player};

/// Heuristic weights for position evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Heuristics {
    /// Weight for piece difference (own minus opponent)
    pub piece_weight: f64,
    /// Weight for own legal move count
    pub mobility_weight: f64,
    /// Weight for center proximity summed over own pieces
    pub center_weight: f64,
    /// Proximity of a piece is `center_anchor - distance_to_center`
    pub center_anchor: f64,
    /// Weight for each own piece adjacent to another own piece
    pub cluster_weight: f64,
}

impl Heuristics {
    /// Weights of the one-ply lookahead tier
    pub fn lookahead() -> Self {
        Self {
            piece_weight: 10.0,
            mobility_weight: 1.5,
            center_weight: 2.0,
            center_anchor: 3.0,
            cluster_weight: 1.0,
        }
    }

    /// Leaf weights of the minimax tier
    pub fn minimax() -> Self {
        Self {
            piece_weight: 2.0,
            mobility_weight: 0.1,
            center_weight: 0.2,
            center_anchor: 4.0,
            cluster_weight: 0.0,
        }
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self::minimax()
    }
}

/// Center proximity of a cell, larger is closer
pub fn center_proximity(hex: Hex, anchor: f64) -> f64 {
    anchor - hex.distance_to_center() as f64
}

/// Evaluate a position from `player`'s perspective.
///
/// Mobility counts `player`'s moves as if it were their turn, whoever is
/// actually to move in `state`.
pub fn evaluate(state: &GameState, player: Player, heuristics: &Heuristics) -> f64 {
    let board = state.board();
    let mut score = heuristics.piece_weight * state.scores().difference(player) as f64;

    let mut center = 0.0;
    let mut cluster = 0usize;
    for hex in board.pieces(player) {
        center += center_proximity(hex, heuristics.center_anchor);
        cluster += hex
            .neighbors()
            .into_iter()
            .filter(|n| board.get(*n) == Some(player))
            .count();
    }
    score += heuristics.center_weight * center;
    score += heuristics.cluster_weight * cluster as f64;

    if heuristics.mobility_weight != 0.0 {
        score += heuristics.mobility_weight * state.mobility(player) as f64;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::level::LevelConfig;

    #[test]
    fn test_evaluate_symmetric() {
        let game = GameState::new(&LevelConfig::by_slug("classic-square").unwrap()).unwrap();
        for heuristics in [Heuristics::lookahead(), Heuristics::minimax()] {
            let one = evaluate(&game, Player::One, &heuristics);
            let two = evaluate(&game, Player::Two, &heuristics);
            assert!((one - two).abs() < 1e-9, "{} vs {}", one, two);
        }
    }

    #[test]
    fn test_minimax_terms() {
        // One piece each on a radius-2 board, jumps of 1 only
        let mut board = Board::new(2);
        board.set(Hex::new(0, 0), Some(Player::One));
        board.set(Hex::new(2, 0), Some(Player::Two));
        let game = GameState::from_board(board, Player::One, 1);

        // diff 0, center 0.2 * 4, mobility 0.1 * 6
        let score = evaluate(&game, Player::One, &Heuristics::minimax());
        assert!((score - (0.8 + 0.6)).abs() < 1e-9);
    }

    #[test]
    fn test_cluster_counts_pairs_both_ways() {
        let mut board = Board::new(2);
        board.set(Hex::new(0, 0), Some(Player::One));
        board.set(Hex::new(1, 0), Some(Player::One));
        let game = GameState::from_board(board, Player::One, 1);

        let heuristics = Heuristics {
            piece_weight: 0.0,
            mobility_weight: 0.0,
            center_weight: 0.0,
            center_anchor: 0.0,
            cluster_weight: 1.0,
        };
        assert_eq!(evaluate(&game, Player::One, &heuristics), 2.0);
    }

    #[test]
    fn test_more_pieces_scores_higher() {
        let mut board = Board::new(3);
        board.set(Hex::new(0, 0), Some(Player::One));
        board.set(Hex::new(1, 0), Some(Player::One));
        board.set(Hex::new(-3, 3), Some(Player::Two));
        let game = GameState::from_board(board, Player::One, 2);
        let h = Heuristics::lookahead();
        assert!(evaluate(&game, Player::One, &h) > evaluate(&game, Player::Two, &h));
    }
}
