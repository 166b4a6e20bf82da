use super::board::{Board, COLS, ROWS};
use super::player::Player;

const WIN_LEN: usize = 4;

impl Board {
    /// Whether `player` owns four consecutive cells anywhere on the board,
    /// along a row, a column, or either diagonal direction.
    ///
    /// Scans every in-bounds 4-cell window, so the answer does not depend
    /// on which move was played last. Cost is proportional to the board
    /// area on every call; at 6x7 that is not worth optimizing.
    pub fn has_four_in_a_row(&self, player: Player) -> bool {
        let target = player.to_cell();

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - WIN_LEN {
                if (0..WIN_LEN).all(|i| self.get(row, col + i) == target) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - WIN_LEN {
                if (0..WIN_LEN).all(|i| self.get(row + i, col) == target) {
                    return true;
                }
            }
        }

        // Diagonal (top-left to bottom-right, \)
        for row in 0..=ROWS - WIN_LEN {
            for col in 0..=COLS - WIN_LEN {
                if (0..WIN_LEN).all(|i| self.get(row + i, col + i) == target) {
                    return true;
                }
            }
        }

        // Diagonal (bottom-left to top-right, /)
        for row in WIN_LEN - 1..ROWS {
            for col in 0..=COLS - WIN_LEN {
                if (0..WIN_LEN).all(|i| self.get(row - i, col + i) == target) {
                    return true;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!board.has_four_in_a_row(Player::Red));
        assert!(!board.has_four_in_a_row(Player::Yellow));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Four in the bottom row, away from the left edge
        for col in 2..6 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(board.has_four_in_a_row(Player::Red));
        assert!(!board.has_four_in_a_row(Player::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(board.has_four_in_a_row(Player::Yellow));
        assert!(!board.has_four_in_a_row(Player::Red));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Staircase so red pieces sit on the / diagonal
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.has_four_in_a_row(Player::Red));
        assert!(!board.has_four_in_a_row(Player::Yellow));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Staircase so red pieces sit on the \ diagonal
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.has_four_in_a_row(Player::Red));
        assert!(!board.has_four_in_a_row(Player::Yellow));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.has_four_in_a_row(Player::Red));
    }

    #[test]
    fn test_win_found_without_move_anchor() {
        // The winning run sits in the middle of the board while the most
        // recent pieces land elsewhere; the whole-board scan still sees it.
        let mut board = Board::new();
        for col in 1..5 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        board.drop_piece(6, Cell::Yellow).unwrap();
        board.drop_piece(0, Cell::Yellow).unwrap();
        assert!(board.has_four_in_a_row(Player::Red));
    }

    #[test]
    fn test_run_longer_than_four_counts() {
        let mut board = Board::new();
        for col in 0..5 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        assert!(board.has_four_in_a_row(Player::Yellow));
    }
}
