use crate::error::SideError;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

impl TryFrom<Cell> for Player {
    type Error = SideError;

    /// An empty cell has no owner, so it never converts to a player.
    fn try_from(cell: Cell) -> Result<Self, SideError> {
        match cell {
            Cell::Red => Ok(Player::Red),
            Cell::Yellow => Ok(Player::Yellow),
            Cell::Empty => Err(SideError::Empty),
        }
    }
}
