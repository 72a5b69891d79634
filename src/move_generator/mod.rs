//! Checkers move generation: capture-chain discovery, simple steps and the
//! side-wide mandatory capture rule.

mod captures;
pub mod generator;

pub use generator::{legal_moves, piece_moves, MoveGenerator, MoveList};
