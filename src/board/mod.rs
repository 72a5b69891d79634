pub mod error;
pub mod position;
pub mod side;
pub mod square;

mod display;

#[cfg(test)]
mod tests;

use error::BoardError;
use position::{Position, BOARD_SIZE};
use side::Side;
use square::Square;

use crate::checkers_position;

/// An 8x8 grid of squares stored row-major. Boards are plain values: the
/// move applier and the search always produce a fresh board instead of
/// mutating the one they were handed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    squares: [[Square; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    /// Black men on the dark squares of rows 0-2, White men on the dark
    /// squares of rows 5-7.
    pub fn starting_position() -> Self {
        checkers_position! {
            .b.b.b.b
            b.b.b.b.
            .b.b.b.b
            ........
            ........
            w.w.w.w.
            .w.w.w.w
            w.w.w.w.
        }
    }

    #[inline]
    pub fn get(&self, position: Position) -> Square {
        self.squares[position.row as usize][position.col as usize]
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        !self.get(position).is_empty()
    }

    pub fn put(&mut self, position: Position, square: Square) -> Result<(), BoardError> {
        if !position.is_dark() {
            return Err(BoardError::LightSquarePutError { position });
        }
        if self.is_occupied(position) {
            return Err(BoardError::SquareOccupiedBoardPutError { position });
        }
        self.set(position, square);
        Ok(())
    }

    pub fn remove(&mut self, position: Position) -> Square {
        let square = self.get(position);
        self.set(position, Square::Empty);
        square
    }

    /// Unchecked write, used by the move applier and capture discovery on
    /// their own copies.
    #[inline]
    pub(crate) fn set(&mut self, position: Position, square: Square) {
        self.squares[position.row as usize][position.col as usize] = square;
    }

    /// Every square owned by `side`, in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Position, Square)> + '_ {
        Position::all()
            .map(move |position| (position, self.get(position)))
            .filter(move |(_, square)| square.owned_by(side))
    }

    pub fn count(&self, square: Square) -> usize {
        self.squares
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&s| s == square)
            .count()
    }
}

pub fn initial_board() -> Board {
    Board::starting_position()
}
