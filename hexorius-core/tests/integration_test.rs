//! Integration tests for the HEXORIUS core
//!
//! Tests the full stack: level setup, rules, AI tiers and the registry

use hexorius_core::{
    board::{cell_count, Board, Hex},
    catalog, AiStrategy, Difficulty, GameError, GameResult, GameState, LevelConfig,
    MinimaxStrategy, Move, Player, StrategyRegistry,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn first_steps() -> GameState {
    GameState::new(&LevelConfig::by_slug("first-steps").unwrap()).unwrap()
}

/// Play random legal moves, checking every transition
fn random_playout(
    mut state: GameState,
    seed: u64,
    max_moves: usize,
    mut check: impl FnMut(&GameState, Move, &GameState),
) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..max_moves {
        let moves = state.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        let next = state.apply(mv).unwrap();
        check(&state, mv, &next);
        state = next;
    }
    state
}

// ============================================================================
// BOARD & RULES
// ============================================================================

#[test]
fn test_every_level_builds_consistent_state() {
    for level in catalog() {
        let state = GameState::new(&level).unwrap();
        let board = state.board();
        assert_eq!(board.len(), cell_count(level.grid_radius));
        assert_eq!(state.scores().one, level.starting_positions.player1.len());
        assert_eq!(state.scores().two, level.starting_positions.player2.len());
        assert_eq!(state.current_player(), Player::One);
        assert!(state.has_legal_move(), "{} starts stuck", level.slug);
    }
}

#[test]
fn test_malformed_level_rejected() {
    let mut level = LevelConfig::by_slug("first-steps").unwrap();
    level.starting_positions.player2.push((Hex::new(-2, 1), Player::Two));
    assert!(matches!(GameState::new(&level), Err(GameError::InvalidLevel { .. })));
}

#[test]
fn test_capture_scenario_from_first_steps() {
    let state = first_steps();
    assert_eq!(Hex::new(-1, 1).distance_to(Hex::new(-1, 2)), 1);

    let next = state.apply_move(Hex::new(-2, 1), Hex::new(-1, 1)).unwrap();
    assert_eq!(next.owner(Hex::new(-1, 2)), Some(Player::One));
    assert_eq!(next.current_player(), Player::Two);
    assert_eq!(next.move_count, 1);
}

#[test]
fn test_move_invariants_over_random_games() {
    for seed in 0..8 {
        let level = &catalog()[seed as usize % 5];
        let start = GameState::new(level).unwrap();

        random_playout(start, seed, 120, |before, mv, after| {
            let mover = before.current_player();
            let opponent = mover.opponent();

            // Partition always holds
            let board = after.board();
            assert_eq!(
                after.scores().one + after.scores().two + board.empty_count(),
                board.len()
            );

            // Captured = opponent's loss; the rest is the move itself
            let captured = before.scores().of(opponent) - after.scores().of(opponent);
            let gained = after.scores().of(mover) - before.scores().of(mover);
            let pre_capture_gain = gained - captured;
            if mv.is_duplication() {
                assert_eq!(pre_capture_gain, 1);
                assert_eq!(after.owner(mv.from), Some(mover));
            } else {
                assert_eq!(pre_capture_gain, 0);
                assert_eq!(after.owner(mv.from), None);
            }

            // Every enemy next to the landing cell converted
            for n in mv.to.neighbors() {
                assert_ne!(after.owner(n), Some(opponent));
                if before.owner(n) == Some(opponent) {
                    assert_eq!(after.owner(n), Some(mover));
                }
            }

            assert_eq!(after.current_player(), opponent);
            assert_eq!(after.move_count, before.move_count + 1);
        });
    }
}

#[test]
fn test_terminal_state_has_no_moves_for_any_piece() {
    let mut finished = 0;
    for seed in 0..20 {
        let end = random_playout(first_steps(), seed, 500, |_, _, _| {});
        if !end.has_legal_move() {
            finished += 1;
            let mover = end.current_player();
            for hex in end.board().pieces(mover) {
                assert!(end.valid_moves(hex).is_empty());
            }
            assert_ne!(end.result(), GameResult::Ongoing);
        }
    }
    assert!(finished > 0);
}

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let state = first_steps();
    let snapshot = state.clone();
    let err = state.apply_move(Hex::new(2, -1), Hex::new(2, 0)).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalMove {
            from: Hex::new(2, -1),
            to: Hex::new(2, 0)
        }
    );
    assert_eq!(state, snapshot);
}

#[test]
fn test_adjacent_moves_with_zero_jump() {
    let mut board = Board::new(2);
    board.set(Hex::new(1, 0), Some(Player::One));
    board.set(Hex::new(2, 0), Some(Player::Two));
    let state = GameState::from_board(board, Player::One, 0);

    let moves = state.valid_moves(Hex::new(1, 0));
    let expected: Vec<Hex> = Hex::new(1, 0)
        .neighbors()
        .into_iter()
        .filter(|n| state.board().contains(*n) && state.owner(*n).is_none())
        .collect();
    assert_eq!(moves.len(), expected.len());
    for hex in expected {
        assert!(moves.contains(&hex));
    }
}

// ============================================================================
// AI
// ============================================================================

#[test]
fn test_every_difficulty_plays_legal_moves() {
    let registry = StrategyRegistry::new().with_hard(MinimaxStrategy::new().with_depth(2));
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for difficulty in Difficulty::ALL {
        let strategy = registry.get(difficulty);
        let mut state = first_steps();
        for _ in 0..6 {
            let Some(mv) = strategy.find_best_move(&state, &mut rng) else {
                break;
            };
            assert!(
                state.valid_moves(mv.from).contains(&mv.to),
                "{} produced illegal {:?}",
                strategy.title(),
                mv
            );
            state = state.apply(mv).unwrap();
        }
    }
}

#[test]
fn test_pruning_does_not_change_root_value() {
    let state = first_steps();
    let pruned = MinimaxStrategy::new().with_depth(2);
    let full = MinimaxStrategy::new().with_depth(2).with_pruning(false);

    let a = pruned.best_scored_move(&state).unwrap();
    let b = full.best_scored_move(&state).unwrap();
    assert_eq!(a.score, b.score);
}

#[test]
fn test_hard_lookups_are_stateless() {
    let registry = StrategyRegistry::new();
    let state = first_steps()
        .apply_move(Hex::new(-2, 1), Hex::new(-1, 1))
        .unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let a = registry.strategy_for("hard").unwrap().find_best_move(&state, &mut rng);
    let b = registry.strategy_for("hard").unwrap().find_best_move(&state, &mut rng);
    assert_eq!(a, b);
}

#[test]
fn test_unknown_difficulty_label() {
    let registry = StrategyRegistry::new();
    assert_eq!(
        registry.strategy_for("insane").unwrap_err(),
        GameError::UnknownDifficulty("insane".to_string())
    );
}
