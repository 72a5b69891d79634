pub mod alpha_beta_searcher;
pub mod board;
pub mod checkers_move;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generator;

pub use alpha_beta_searcher::{best_move, minimax, SearchResult};
pub use board::{initial_board, Board};
pub use checkers_move::{apply, Move};
pub use evaluate::evaluate;
pub use move_generator::{legal_moves, piece_moves};
