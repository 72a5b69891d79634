use log::trace;

use crate::board::square::Square;
use crate::board::Board;

use super::Move;

impl Move {
    /// Plays this move on a copy of `board` and returns the copy. The move
    /// must come from the move generator for this exact board; nothing is
    /// re-validated here.
    pub fn apply(&self, board: &Board) -> Board {
        let mut next = *board;

        let mut piece = next.remove(self.from);
        debug_assert!(
            !piece.is_empty(),
            "cannot apply {}, the `from` square is empty",
            self
        );

        for &jumped in self.captured.iter() {
            next.set(jumped, Square::Empty);
        }

        if let Some(side) = piece.side() {
            if !piece.is_king() && self.to.row == side.promotion_row() {
                trace!("{} crowns a {} king", self, side);
                piece = piece.promoted();
            }
        }

        next.set(self.to, piece);
        next
    }
}

pub fn apply(board: &Board, checkers_move: &Move) -> Board {
    checkers_move.apply(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::position::Position;
    use crate::{capture_move, checkers_position, step_move};

    #[test]
    fn test_apply_step_leaves_input_untouched() {
        let board = Board::starting_position();
        let step = step_move!((5, 0), (4, 1));
        let next = apply(&board, &step);

        assert_eq!(next.get(Position::new(5, 0)), Square::Empty);
        assert_eq!(next.get(Position::new(4, 1)), Square::WhiteMan);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn test_apply_capture_chain_clears_every_jumped_square() {
        let board = checkers_position! {
            ........
            ........
            ........
            ..b.....
            ........
            ..b.....
            .w......
            ........
        };
        let chain = capture_move!((6, 1), (2, 1), [(5, 2), (3, 2)]);
        let next = chain.apply(&board);

        assert_eq!(next.get(Position::new(6, 1)), Square::Empty);
        assert_eq!(next.get(Position::new(5, 2)), Square::Empty);
        assert_eq!(next.get(Position::new(3, 2)), Square::Empty);
        assert_eq!(next.get(Position::new(2, 1)), Square::WhiteMan);
        assert_eq!(next.get(Position::new(4, 3)), Square::Empty);
        assert_eq!(next.count(Square::BlackMan), 0);
        assert_eq!(next.count(Square::WhiteMan), 1);
    }

    #[test]
    fn test_white_man_promotes_on_row_zero() {
        let board = checkers_position! {
            ........
            ..w.....
            ........
            ........
            ........
            ........
            ........
            ........
        };
        let next = step_move!((1, 2), (0, 1)).apply(&board);
        assert_eq!(next.get(Position::new(0, 1)), Square::WhiteKing);
    }

    #[test]
    fn test_black_man_promotes_on_row_seven_after_capture() {
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ........
            ..b.....
            ...w....
            ........
        };
        let next = capture_move!((5, 2), (7, 4), [(6, 3)]).apply(&board);
        assert_eq!(next.get(Position::new(7, 4)), Square::BlackKing);
        assert_eq!(next.get(Position::new(6, 3)), Square::Empty);
        assert_eq!(next.get(Position::new(5, 2)), Square::Empty);
    }

    #[test]
    fn test_king_never_reverts() {
        let board = checkers_position! {
            ........
            ..W.....
            ........
            ........
            ........
            ........
            ........
            ........
        };
        let next = step_move!((1, 2), (2, 3)).apply(&board);
        assert_eq!(next.get(Position::new(2, 3)), Square::WhiteKing);
        let back = step_move!((2, 3), (1, 2)).apply(&next);
        assert_eq!(back.get(Position::new(1, 2)), Square::WhiteKing);
    }

    #[test]
    fn test_man_on_far_row_other_side_is_not_promoted() {
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            .w......
            ........
        };
        // A white man moving backwards is never generated, but the applier
        // only crowns on the side's own promotion row.
        let next = step_move!((6, 1), (7, 0)).apply(&board);
        assert_eq!(next.get(Position::new(7, 0)), Square::WhiteMan);
    }
}
