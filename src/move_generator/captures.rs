use crate::board::position::Position;
use crate::board::side::Side;
use crate::board::square::Square;
use crate::board::Board;
use crate::checkers_move::{CaptureList, Move};

use super::MoveList;

/// Men and kings capture in all four diagonal directions. Only simple steps
/// are restricted by piece kind.
pub(crate) const JUMP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares already jumped within the chain being built.
#[derive(Clone, Copy, Default, Debug)]
struct CapturedSquares(u64);

impl CapturedSquares {
    #[inline]
    fn contains(&self, position: Position) -> bool {
        self.0 & (1 << position.index()) != 0
    }

    #[inline]
    fn with(&self, position: Position) -> Self {
        Self(self.0 | (1 << position.index()))
    }
}

/// Appends one move per maximal capture chain starting at `origin`.
/// Returns false when the piece has no capture at all.
pub(crate) fn generate_capture_chains(board: &Board, origin: Position, moves: &mut MoveList) -> bool {
    let side = match board.get(origin).side() {
        Some(side) => side,
        None => return false,
    };

    let mut path = CaptureList::new();
    extend_chain(
        board,
        origin,
        origin,
        side,
        &mut path,
        CapturedSquares::default(),
        moves,
    )
}

/// Tries every jump from `current`. A jump whose landing square allows no
/// further jump ends the chain and becomes a move; otherwise only the longer
/// continuations are kept. The piece keeps the kind it had at `origin` for
/// the whole chain, since crowning happens when the move is applied.
fn extend_chain(
    board: &Board,
    origin: Position,
    current: Position,
    side: Side,
    path: &mut CaptureList,
    captured: CapturedSquares,
    moves: &mut MoveList,
) -> bool {
    let mut found_capture = false;

    for &(dr, dc) in JUMP_DIRECTIONS.iter() {
        let (jumped, landing) = match (current.offset(dr, dc), current.offset(2 * dr, 2 * dc)) {
            (Some(jumped), Some(landing)) => (jumped, landing),
            _ => continue,
        };

        if !board.get(jumped).owned_by(side.opposite())
            || captured.contains(jumped)
            || !board.get(landing).is_empty()
        {
            continue;
        }

        found_capture = true;

        let mut next = *board;
        next.set(landing, board.get(current));
        next.set(current, Square::Empty);
        next.set(jumped, Square::Empty);

        path.push(jumped);
        let extended = extend_chain(
            &next,
            origin,
            landing,
            side,
            path,
            captured.with(jumped),
            moves,
        );
        if !extended {
            moves.push(Move::capture(origin, landing, path.clone()));
        }
        path.pop();
    }

    found_capture
}
