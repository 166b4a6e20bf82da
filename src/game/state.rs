use crate::error::MoveError;

use super::{Board, Player};

/// How a board looks from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Draw,
    Ongoing,
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(Player),
    Draw,
}

/// Classify `board` for `side`: a win if that side has four in a row, a
/// draw if the board is full, otherwise still ongoing.
///
/// The win check comes first: a full board that contains a completed line
/// for `side` is a win, not a draw.
pub fn classify(board: &Board, side: Player) -> GameOutcome {
    if board.has_four_in_a_row(side) {
        GameOutcome::Win
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    result: Option<GameResult>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            result: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game result if game is over
    pub fn outcome(&self) -> Option<GameResult> {
        self.result
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.board.playable_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())?;

        self.result = match classify(&self.board, self.current_player) {
            GameOutcome::Win => Some(GameResult::Winner(self.current_player)),
            GameOutcome::Draw => Some(GameResult::Draw),
            GameOutcome::Ongoing => None,
        };

        self.current_player = self.current_player.other();

        Ok(())
    }
}
