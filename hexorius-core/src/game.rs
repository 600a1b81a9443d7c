//! Game state, move generation and move execution

use serde::{Deserialize, Serialize};

use crate::board::{Board, Hex};
use crate::error::{GameError, Result};
use crate::level::LevelConfig;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player side. `One` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Winner(Player),
    Draw,
}

/// A move of one piece. Distance 1 duplicates, anything farther jumps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Hex,
    pub to: Hex,
}

impl Move {
    pub const fn new(from: Hex, to: Hex) -> Self {
        Self { from, to }
    }

    pub fn distance(&self) -> i16 {
        self.from.distance_to(self.to)
    }

    /// Duplication keeps the origin piece in place
    pub fn is_duplication(&self) -> bool {
        self.distance() == 1
    }
}

/// Piece counts per side
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub one: usize,
    pub two: usize,
}

impl Scores {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// Pieces on the board for both sides
    pub fn total(&self) -> usize {
        self.one + self.two
    }

    /// `player`'s count minus the opponent's
    pub fn difference(&self, player: Player) -> i64 {
        self.of(player) as i64 - self.of(player.opponent()) as i64
    }

    fn recount(board: &Board) -> Self {
        Self {
            one: board.count(Player::One),
            two: board.count(Player::Two),
        }
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Immutable game snapshot. Every move produces a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    scores: Scores,
    max_jump_distance: u8,
    /// Moves played since the start of the game
    pub move_count: u32,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create the initial state of a level. Player one moves first.
    pub fn new(level: &LevelConfig) -> Result<Self> {
        level.validate()?;

        let mut board = Board::new(level.grid_radius);
        for (hex, player) in level.starting_positions.iter() {
            board.set(hex, Some(player));
        }

        Ok(Self::from_board(board, Player::One, level.max_jump_distance))
    }

    /// Create a state from an arbitrary position
    pub fn from_board(board: Board, current_player: Player, max_jump_distance: u8) -> Self {
        let scores = Scores::recount(&board);
        Self {
            board,
            current_player,
            scores,
            max_jump_distance,
            move_count: 0,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn max_jump_distance(&self) -> u8 {
        self.max_jump_distance
    }

    /// Owner of a cell
    pub fn owner(&self, hex: Hex) -> Option<Player> {
        self.board.get(hex)
    }

    /// Total pieces on the board
    pub fn piece_count(&self) -> usize {
        self.scores.total()
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// Adjacent cells are always reachable, whatever the jump limit
    fn in_range(&self, from: Hex, to: Hex) -> bool {
        let distance = from.distance_to(to);
        distance == 1 || distance <= i16::from(self.max_jump_distance)
    }

    /// Empty destinations for the piece at `origin`. Empty when `origin` is
    /// not owned by the side to move.
    pub fn valid_moves(&self, origin: Hex) -> Vec<Hex> {
        if self.board.get(origin) != Some(self.current_player) {
            return vec![];
        }
        self.destinations(origin).collect()
    }

    fn destinations(&self, origin: Hex) -> impl Iterator<Item = Hex> + '_ {
        self.board
            .empty_cells()
            .filter(move |&cell| self.in_range(origin, cell))
    }

    /// Every legal move for the side to move, in board order
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces(self.current_player)
            .flat_map(|from| self.destinations(from).map(move |to| Move::new(from, to)))
            .collect()
    }

    /// Whether the side to move can play at all. Only the current side is
    /// checked: when it is stuck the game is over, there is no pass.
    pub fn has_legal_move(&self) -> bool {
        self.board
            .pieces(self.current_player)
            .any(|from| self.destinations(from).next().is_some())
    }

    /// Number of legal moves `player` would have if it were their turn
    pub fn mobility(&self, player: Player) -> usize {
        self.board
            .pieces(player)
            .map(|from| self.destinations(from).count())
            .sum()
    }

    /// Legal destinations of the piece at `origin`, whoever owns it
    pub fn mobility_of(&self, origin: Hex) -> usize {
        match self.board.get(origin) {
            Some(_) => self.destinations(origin).count(),
            None => 0,
        }
    }

    // ========================================================================
    // MOVE EXECUTION
    // ========================================================================

    /// Play `from -> to` for the side to move.
    ///
    /// Fails with [`GameError::IllegalMove`] unless `from` belongs to the
    /// side to move and `to` is one of its valid destinations. `self` is
    /// never modified.
    pub fn apply_move(&self, from: Hex, to: Hex) -> Result<Self> {
        let legal = self.board.get(from) == Some(self.current_player)
            && self.board.contains(to)
            && self.board.get(to).is_none()
            && self.in_range(from, to);

        if !legal {
            return Err(GameError::IllegalMove { from, to });
        }
        Ok(self.apply_legal(Move::new(from, to)))
    }

    /// Play a [`Move`] for the side to move
    pub fn apply(&self, mv: Move) -> Result<Self> {
        self.apply_move(mv.from, mv.to)
    }

    /// Apply a move already known to be legal (generated by this state)
    pub(crate) fn apply_legal(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.apply_move_internal(mv);
        next
    }

    fn apply_move_internal(&mut self, mv: Move) {
        let mover = self.current_player;

        self.board.set(mv.to, Some(mover));
        if !mv.is_duplication() {
            self.board.set(mv.from, None);
        }

        // Convert every adjacent enemy piece
        let opponent = mover.opponent();
        for neighbor in mv.to.neighbors() {
            if self.board.get(neighbor) == Some(opponent) {
                self.board.set(neighbor, Some(mover));
            }
        }

        self.scores = Scores::recount(&self.board);
        self.current_player = opponent;
        self.move_count += 1;
    }

    // ========================================================================
    // RESULT
    // ========================================================================

    /// `Ongoing` while the side to move can play, then decided by score
    pub fn result(&self) -> GameResult {
        if self.has_legal_move() {
            return GameResult::Ongoing;
        }
        self.result_by_score()
    }

    /// Decide by piece count alone (used when a game is cut off)
    pub fn result_by_score(&self) -> GameResult {
        match self.scores.one.cmp(&self.scores.two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
