//! Move representation and application.

pub mod apply;
pub mod checkers_move;

pub use apply::apply;
pub use checkers_move::{CaptureList, Move};
