use thiserror::Error;

use super::position::Position;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on {position}, only dark squares may be occupied")]
    LightSquarePutError { position: Position },
    #[error("Cannot put a piece on {position}, the square is already occupied")]
    SquareOccupiedBoardPutError { position: Position },
    #[error("Invalid board diagram, expected 8 rows but found {rows}")]
    InvalidRowCountError { rows: usize },
    #[error("Invalid board diagram, row {row} has {len} squares instead of 8")]
    InvalidRowLengthError { row: usize, len: usize },
    #[error("Invalid board diagram, unknown piece character {0:?}")]
    InvalidPieceCharError(char),
}
