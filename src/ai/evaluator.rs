use crate::error::AgentError;
use crate::game::{Board, GameState, Player, COLS, ROWS};

use super::agent::Agent;

/// Trait for scoring a board position. Higher scores favor Red.
///
/// Implementations must be deterministic: the same board always yields
/// the same score. Move selectors rely on this for reproducible play.
pub trait Evaluator: Send {
    fn score(&self, board: &Board) -> f64;
}

/// Weights for [`WindowEvaluator`], loadable from configuration.
///
/// `own_*` weights reward red threats and should be positive; `opp_*`
/// weights penalize yellow threats and should be negative.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowWeights {
    pub center_bonus: f64,
    pub own_three: f64,
    pub own_two: f64,
    pub opp_three: f64,
    pub opp_two: f64,
}

impl Default for WindowWeights {
    fn default() -> Self {
        WindowWeights {
            center_bonus: 3.0,
            own_three: 50.0,
            own_two: 10.0,
            opp_three: -80.0,
            opp_two: -10.0,
        }
    }
}

/// Heuristic evaluator that scans all 4-cell windows and scores threats,
/// plus a bonus for pieces in the center column.
pub struct WindowEvaluator {
    weights: WindowWeights,
}

impl WindowEvaluator {
    pub fn new(weights: WindowWeights) -> Self {
        WindowEvaluator { weights }
    }

    fn score_window(&self, red: usize, yellow: usize, empty: usize) -> f64 {
        if red == 3 && empty == 1 {
            self.weights.own_three
        } else if red == 2 && empty == 2 {
            self.weights.own_two
        } else if yellow == 3 && empty == 1 {
            self.weights.opp_three
        } else if yellow == 2 && empty == 2 {
            self.weights.opp_two
        } else {
            0.0
        }
    }

    /// Tally one 4-cell window starting at (row, col) and stepping by
    /// (row_step, col_step).
    fn window_score(&self, board: &Board, row: usize, col: usize, steps: (isize, isize)) -> f64 {
        let mut red = 0;
        let mut yellow = 0;
        let mut empty = 0;
        for i in 0..4 {
            let r = (row as isize + steps.0 * i) as usize;
            let c = (col as isize + steps.1 * i) as usize;
            match Player::try_from(board.get(r, c)) {
                Ok(Player::Red) => red += 1,
                Ok(Player::Yellow) => yellow += 1,
                Err(_) => empty += 1,
            }
        }
        self.score_window(red, yellow, empty)
    }
}

impl Default for WindowEvaluator {
    fn default() -> Self {
        Self::new(WindowWeights::default())
    }
}

impl Evaluator for WindowEvaluator {
    fn score(&self, board: &Board) -> f64 {
        let mut score = 0.0;

        // Center column bonus
        for row in 0..ROWS {
            match Player::try_from(board.get(row, 3)) {
                Ok(Player::Red) => score += self.weights.center_bonus,
                Ok(Player::Yellow) => score -= self.weights.center_bonus,
                Err(_) => {}
            }
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                score += self.window_score(board, row, col, (0, 1));
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                score += self.window_score(board, row, col, (1, 0));
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                score += self.window_score(board, row, col, (1, 1));
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                score += self.window_score(board, row, col, (-1, 1));
            }
        }

        score
    }
}

/// Move selector that ranks candidate columns with an [`Evaluator`]
/// instead of exhaustive search.
///
/// The evaluator instance is owned by the agent and injected at
/// construction, so swapping in a learned scorer is a one-line change for
/// the caller. Candidate handling mirrors the minimax selector: ascending
/// column order, Red maximizes the score, Yellow minimizes it, and the
/// first column reaching the best score wins ties.
pub struct EvaluatorAgent {
    evaluator: Box<dyn Evaluator>,
}

impl EvaluatorAgent {
    pub fn new(evaluator: Box<dyn Evaluator>) -> Self {
        EvaluatorAgent { evaluator }
    }

    /// Pick a column for `side` on `board` by scoring each candidate's
    /// resulting position. The caller's board is never touched.
    pub fn choose(&mut self, board: &Board, side: Player) -> Result<usize, AgentError> {
        let candidates = board.playable_columns();
        if candidates.is_empty() {
            return Err(AgentError::NoValidMoves);
        }

        let maximizing = side == Player::Red;
        let mut best_col = candidates[0];
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for col in candidates {
            let mut next = *board;
            next.drop_piece(col, side.to_cell()).unwrap();
            let score = self.evaluator.score(&next);
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

impl Default for EvaluatorAgent {
    fn default() -> Self {
        Self::new(Box::new(WindowEvaluator::default()))
    }
}

impl Agent for EvaluatorAgent {
    fn select_move(&mut self, state: &GameState) -> Result<usize, AgentError> {
        self.choose(state.board(), state.current_player())
    }

    fn name(&self) -> &str {
        "Evaluator"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(EvaluatorAgent::default())
    }
}
