use log::trace;
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::board::position::Position;
use crate::board::side::Side;
use crate::board::Board;
use crate::checkers_move::Move;

use super::captures::{generate_capture_chains, JUMP_DIRECTIONS};

/// Minimum number of moves required to use parallel iteration when counting
/// positions. Below this, the cost of spawning tasks outweighs the benefit.
const PARALLEL_MOVE_THRESHOLD: usize = 8;

/// A list of checkers moves that is optimized for small sizes.
pub type MoveList = SmallVec<[Move; 16]>;

/// Generates all legal moves for a given board and side.
#[derive(Clone, Copy, Default, Debug)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// The legal moves of `side`. If any piece can capture, only captures are
    /// returned, from every piece that has one; otherwise every simple step.
    /// Order is row-major over the pieces, then per-piece generation order.
    pub fn generate_moves(&self, board: &Board, side: Side) -> MoveList {
        let mut captures = MoveList::new();
        let mut steps = MoveList::new();

        for (position, _) in board.pieces(side) {
            if !generate_capture_chains(board, position, &mut captures) && captures.is_empty() {
                generate_steps(board, position, &mut steps);
            }
        }

        if captures.is_empty() {
            steps
        } else {
            trace!("{} must capture, {} capture moves", side, captures.len());
            captures
        }
    }

    /// The moves of the single piece on `position`: its maximal capture
    /// chains, or its simple steps when it has no capture. The side-wide
    /// capture rule is not applied here.
    pub fn piece_moves(&self, board: &Board, position: Position) -> MoveList {
        let mut moves = MoveList::new();
        if !generate_capture_chains(board, position, &mut moves) {
            generate_steps(board, position, &mut moves);
        }
        moves
    }

    /// Counts every move in the legal-move tree down to `depth` further plies
    /// (`depth == 0` counts only the moves available now).
    pub fn count_positions(&self, depth: u8, board: &Board, side: Side) -> usize {
        let candidates = self.generate_moves(board, side);
        let initial_count = candidates.len();

        if depth == 0 {
            return initial_count;
        }

        let next_side = side.opposite();

        let inner_count = if candidates.len() >= PARALLEL_MOVE_THRESHOLD {
            candidates
                .par_iter()
                .map(|checkers_move| {
                    let next = checkers_move.apply(board);
                    self.count_positions(depth - 1, &next, next_side)
                })
                .sum::<usize>()
        } else {
            candidates
                .iter()
                .map(|checkers_move| {
                    let next = checkers_move.apply(board);
                    self.count_positions(depth - 1, &next, next_side)
                })
                .sum::<usize>()
        };

        initial_count + inner_count
    }
}

/// One diagonal step onto an empty square: forward only for men, any
/// direction for kings.
fn generate_steps(board: &Board, position: Position, moves: &mut MoveList) {
    let piece = board.get(position);
    let side = match piece.side() {
        Some(side) => side,
        None => return,
    };

    let forward = side.forward();
    let man_directions = [(forward, -1), (forward, 1)];
    let directions: &[(i8, i8)] = if piece.is_king() {
        &JUMP_DIRECTIONS
    } else {
        &man_directions
    };

    for &(dr, dc) in directions {
        if let Some(target) = position.offset(dr, dc) {
            if board.get(target).is_empty() {
                moves.push(Move::step(position, target));
            }
        }
    }
}

/// Legal moves of `side`, with the mandatory capture rule applied.
pub fn legal_moves(board: &Board, side: Side) -> MoveList {
    MoveGenerator.generate_moves(board, side)
}

/// Moves of the single piece on `position`, for highlighting.
pub fn piece_moves(board: &Board, position: Position) -> MoveList {
    MoveGenerator.piece_moves(board, position)
}
