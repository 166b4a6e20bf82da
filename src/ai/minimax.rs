use crate::error::AgentError;
use crate::game::{Board, GameState, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::agent::Agent;

/// Value of a finished position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Winner(Player),
    Draw,
}

impl SearchResult {
    /// Numeric score from Red's perspective.
    pub fn score(self) -> i32 {
        match self {
            SearchResult::Winner(Player::Red) => 10,
            SearchResult::Winner(Player::Yellow) => -10,
            SearchResult::Draw => 0,
        }
    }
}

/// Terminal test for the search: a completed line for either side ends
/// the position immediately, and a full board with no line is a draw.
/// `None` means play continues.
pub fn terminal_value(board: &Board) -> Option<SearchResult> {
    if board.has_four_in_a_row(Player::Red) {
        return Some(SearchResult::Winner(Player::Red));
    }
    if board.has_four_in_a_row(Player::Yellow) {
        return Some(SearchResult::Winner(Player::Yellow));
    }
    if board.is_full() {
        return Some(SearchResult::Draw);
    }
    None
}

/// Exhaustive minimax score of `board` with `to_move` to play, from Red's
/// perspective: +10 for a red win, -10 for a yellow win, 0 for a draw.
///
/// The layer where Red moves takes the maximum child score and the Yellow
/// layer the minimum. Each branch recurses on an owned copy of the board,
/// so sibling branches never observe each other's mutations. A terminal
/// line is returned immediately at any depth.
///
/// There is no pruning and no memoization; the tree is exponential in the
/// number of open columns. That is fine near the endgame and as a
/// reference oracle, but not for searching from an open position.
/// Recursion depth is bounded by the 42 cells of the board.
pub fn minimax(board: &Board, to_move: Player) -> i32 {
    if let Some(result) = terminal_value(board) {
        return result.score();
    }

    let maximizing = to_move == Player::Red;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for col in board.playable_columns() {
        let mut next = *board;
        next.drop_piece(col, to_move.to_cell()).unwrap();
        let score = minimax(&next, to_move.other());
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Move selector backed by exhaustive minimax.
pub struct MinimaxAgent {
    shuffle: Option<StdRng>,
}

impl MinimaxAgent {
    /// Deterministic selector: candidates are tried in ascending column
    /// order, and the first column reaching the best score wins ties.
    pub fn new() -> Self {
        MinimaxAgent { shuffle: None }
    }

    /// Shuffle the candidate order with an explicitly seeded generator.
    /// Ties then fall to the first best-scoring column of the shuffled
    /// order, so a fixed seed still gives reproducible games.
    pub fn with_shuffle(seed: u64) -> Self {
        MinimaxAgent {
            shuffle: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick a column for `side` on `board`.
    ///
    /// Every candidate is applied to a scratch copy, so the caller's board
    /// is never touched. Red takes the column with the maximum minimax
    /// score, Yellow the minimum.
    pub fn choose(&mut self, board: &Board, side: Player) -> Result<usize, AgentError> {
        let mut candidates = board.playable_columns();
        if candidates.is_empty() {
            return Err(AgentError::NoValidMoves);
        }
        if let Some(rng) = &mut self.shuffle {
            candidates.shuffle(rng);
        }

        let maximizing = side == Player::Red;
        let mut best_col = candidates[0];
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for col in candidates {
            let mut next = *board;
            next.drop_piece(col, side.to_cell()).unwrap();
            let score = minimax(&next, side.other());
            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_col = col;
            }
        }

        Ok(best_col)
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &GameState) -> Result<usize, AgentError> {
        self.choose(state.board(), state.current_player())
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MinimaxAgent::new())
    }
}
