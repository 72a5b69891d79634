use std::fmt;

use smallvec::SmallVec;

use crate::board::position::Position;

/// Jumped squares of a capture chain, in the order they were captured.
pub type CaptureList = SmallVec<[Position; 4]>;

/// A complete move: a single step, or a whole capture chain. `captured` is
/// empty for a step.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: CaptureList,
}

impl Move {
    pub fn step(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: CaptureList::new(),
        }
    }

    pub fn capture(from: Position, to: Position, captured: CaptureList) -> Self {
        debug_assert!(!captured.is_empty(), "a capture must jump at least one piece");
        Self { from, to, captured }
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Every square the piece lands on, ending with `to`. Each landing square
    /// lies one step beyond the jumped piece, on the line from the previous
    /// landing square.
    pub fn landing_squares(&self) -> Vec<Position> {
        if !self.is_capture() {
            return vec![self.to];
        }

        let mut current = self.from;
        self.captured
            .iter()
            .map(|jumped| {
                current = Position::new(
                    2 * jumped.row - current.row,
                    2 * jumped.col - current.col,
                );
                current
            })
            .collect()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_capture() {
            return write!(f, "{}-{}", self.from, self.to);
        }

        write!(f, "{}", self.from)?;
        for landing in self.landing_squares() {
            write!(f, "x{}", landing)?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! step_move {
    (($fr:expr, $fc:expr), ($tr:expr, $tc:expr)) => {
        $crate::checkers_move::Move::step(
            $crate::board::position::Position::new($fr, $fc),
            $crate::board::position::Position::new($tr, $tc),
        )
    };
}

#[macro_export]
macro_rules! capture_move {
    (($fr:expr, $fc:expr), ($tr:expr, $tc:expr), [$(($cr:expr, $cc:expr)),+ $(,)?]) => {
        $crate::checkers_move::Move::capture(
            $crate::board::position::Position::new($fr, $fc),
            $crate::board::position::Position::new($tr, $tc),
            $crate::checkers_move::CaptureList::from_slice(&[
                $($crate::board::position::Position::new($cr, $cc)),+
            ]),
        )
    };
}
