use crate::board::position::{Position, BOARD_SIZE};
use crate::board::square::Square;
use crate::board::Board;

pub const MAN_VALUE: i32 = 100;
pub const KING_VALUE: i32 = 300;
/// Bonus per row for men, see `square_score`.
pub const ROW_BONUS: i32 = 5;

/// Static score of the board: positive favors White, negative favors Black.
/// Material plus a per-row bonus for men; no lookahead and no mobility term.
#[inline(always)]
pub fn evaluate(board: &Board) -> i32 {
    Position::all()
        .map(|position| square_score(board.get(position), position.row))
        .sum()
}

#[inline(always)]
fn square_score(square: Square, row: u8) -> i32 {
    let row = row as i32;
    match square {
        Square::WhiteMan => MAN_VALUE + ROW_BONUS * row,
        Square::WhiteKing => KING_VALUE,
        Square::BlackMan => -MAN_VALUE - ROW_BONUS * (BOARD_SIZE as i32 - 1 - row),
        Square::BlackKing => -KING_VALUE,
        Square::Empty => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers_position;

    #[test]
    fn test_starting_position_is_balanced() {
        assert_eq!(evaluate(&Board::starting_position()), 0);
    }

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_men_score_by_row() {
        let board = checkers_position! {
            ........
            ........
            ...b....
            ....w...
            ........
            ........
            ........
            ........
        };
        // white: 100 + 5 * 3, black: -(100 + 5 * (7 - 2))
        assert_eq!(evaluate(&board), 115 - 125);
    }

    #[test]
    fn test_kings_ignore_row() {
        let board = checkers_position! {
            .W......
            ........
            ........
            ........
            ........
            ........
            ........
            B.......
        };
        assert_eq!(evaluate(&board), 0);

        let board = checkers_position! {
            .W......
            ........
            ........
            ........
            ........
            ........
            ........
            w.......
        };
        assert_eq!(evaluate(&board), 300 + 100 + 35);
    }
}
