//! Plain-text board rendering for console play and test diagnostics.

use std::fmt;

use crate::game::{Board, Cell, COLS, ROWS};

/// Rows are printed top first, so the bottom row (where pieces land)
/// appears last, directly above the column-index footer:
///
/// ```text
/// |. . . . . . .|
/// |. . . . . . .|
/// |. . . . . . .|
/// |. . . . . . .|
/// |. Y . . . . .|
/// |. R R . . . .|
/// |0 1 2 3 4 5 6|
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            write!(f, "|")?;
            for col in 0..COLS {
                let ch = match self.get(row, col) {
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                    Cell::Empty => '.',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f, "|")?;
        }

        write!(f, "|")?;
        for col in 0..COLS {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{col}")?;
        }
        write!(f, "|")
    }
}
