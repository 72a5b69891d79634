//! Parses squares (`a3`) and moves (`a3-b4`, `a3 b4`, `c3xe5xg3`) typed by a
//! human player.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::position::{Position, BOARD_SIZE};
use crate::checkers_move::Move;

static SQUARE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-h][1-8]").unwrap());
static SQUARE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-h])([1-8])$").unwrap());
static MOVE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-h][1-8](?:\s*[-x ]\s*[a-h][1-8])+$").unwrap());

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("invalid square `{0}`, expected a file a-h followed by a rank 1-8")]
    InvalidSquare(String),
    #[error("invalid move `{0}`, expected e.g. `a3-b4` or `c3xe5xg3`")]
    InvalidMove(String),
}

/// Parses a square name such as `a3`. Rank 1 is row 7, White's back rank.
pub fn parse_square(input: &str) -> Result<Position, InputError> {
    let name = input.trim().to_lowercase();
    let captures = SQUARE_NAME_REGEX
        .captures(&name)
        .ok_or_else(|| InputError::InvalidSquare(input.to_string()))?;

    let file = captures[1].as_bytes()[0] - b'a';
    let rank = captures[2].as_bytes()[0] - b'0';
    Ok(Position::new(BOARD_SIZE - rank, file))
}

/// A move as typed: the starting square followed by one or more landing
/// squares. A step or a single jump names two squares; a longer chain may
/// name every landing square to pick between chains with the same ends.
#[derive(Clone, PartialEq, Debug)]
pub struct MoveInput {
    squares: Vec<Position>,
}

impl MoveInput {
    pub fn from(&self) -> Position {
        self.squares[0]
    }

    pub fn to(&self) -> Position {
        self.squares[self.squares.len() - 1]
    }

    /// True if `candidate` starts and ends on the typed squares and, when
    /// intermediate landings were typed, lands on exactly those.
    pub fn matches(&self, candidate: &Move) -> bool {
        if candidate.from != self.from() || candidate.to != self.to() {
            return false;
        }
        self.squares.len() == 2 || candidate.landing_squares() == self.squares[1..]
    }
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();
        if !MOVE_REGEX.is_match(&trimmed) {
            return Err(InputError::InvalidMove(input.to_string()));
        }

        let squares = SQUARE_REGEX
            .find_iter(&trimmed)
            .map(|found| parse_square(found.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { squares })
    }
}
