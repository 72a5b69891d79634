use std::fmt;
use std::str::FromStr;

use super::error::BoardError;
use super::position::{Position, BOARD_SIZE};
use super::square::Square;
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.get(Position::new(row, col)).to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        Ok(())
    }
}

/// Parses a compact diagram: 8 rows of 8 characters separated by `/`,
/// row 0 first, e.g. `.b.b.b.b/b.b.b.b./.../w.w.w.w.`.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(diagram: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = diagram.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::InvalidRowCountError { rows: rows.len() });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != BOARD_SIZE as usize {
                return Err(BoardError::InvalidRowLengthError {
                    row,
                    len: chars.len(),
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                let square = Square::from_char(c).ok_or(BoardError::InvalidPieceCharError(c))?;
                if !square.is_empty() {
                    board.put(Position::new(row as u8, col as u8), square)?;
                }
            }
        }
        Ok(board)
    }
}

impl Board {
    /// The inverse of `FromStr`.
    pub fn to_diagram(&self) -> String {
        (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| self.get(Position::new(row, col)).to_char())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[macro_export]
macro_rules! checkers_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        // The first character is row 0, Black's back rank.
        for (i, &c) in pieces.iter().enumerate() {
            let square = $crate::board::square::Square::from_char(c)
                .expect("Invalid character in checkers position");
            if !square.is_empty() {
                let position = $crate::board::position::Position::new((i / 8) as u8, (i % 8) as u8);
                board.put(position, square).expect("Invalid square in checkers position");
            }
        }
        board
    }};
}
