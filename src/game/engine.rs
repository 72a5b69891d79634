use std::str::FromStr;

use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{best_move, SearchError};
use crate::board::position::Position;
use crate::board::side::Side;
use crate::board::Board;
use crate::checkers_move::Move;
use crate::input_handler::{InputError, MoveInput};
use crate::move_generator::{legal_moves, MoveList};

pub const MIN_SEARCH_DEPTH: u8 = 2;
pub const MAX_SEARCH_DEPTH: u8 = 8;
pub const DEFAULT_SEARCH_DEPTH: u8 = 6;

/// Core engine state and configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub starting_position: Board,
    pub starting_side: Side,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            starting_position: Board::starting_position(),
            starting_side: Side::White,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_depth(self.search_depth)
    }
}

fn validate_depth(depth: u8) -> Result<(), EngineError> {
    if (MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&depth) {
        Ok(())
    } else {
        Err(EngineError::DepthOutOfRange { depth })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Invalid move")]
    InvalidMove,
    #[error("The game is over, {winner} won")]
    GameOver { winner: Side },
    #[error("Search depth {depth} is out of range ({}-{})", MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH)]
    DepthOutOfRange { depth: u8 },
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Owns the current board and whose turn it is. After every move the side
/// to move is checked for legal moves; a side without any has lost.
pub struct Engine {
    config: EngineConfig,
    board: Board,
    turn: Side,
    winner: Option<Side>,
    last_score: Option<i32>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_validated_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::from_validated_config(config))
    }

    fn from_validated_config(config: EngineConfig) -> Self {
        let mut engine = Self {
            board: config.starting_position,
            turn: config.starting_side,
            config,
            winner: None,
            last_score: None,
        };
        engine.check_game_over();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Score of the computer's last search, from White's point of view.
    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    pub fn search_depth(&self) -> u8 {
        self.config.search_depth
    }

    pub fn set_search_depth(&mut self, depth: u8) -> Result<(), EngineError> {
        validate_depth(depth)?;
        self.config.search_depth = depth;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.board = self.config.starting_position;
        self.turn = self.config.starting_side;
        self.winner = None;
        self.last_score = None;
        self.check_game_over();
    }

    pub fn valid_moves(&self) -> MoveList {
        legal_moves(&self.board, self.turn)
    }

    /// Legal moves of the piece on `position`. Unlike the bare generator,
    /// a piece without a capture gets nothing while another piece must
    /// capture.
    pub fn piece_moves(&self, position: Position) -> MoveList {
        self.valid_moves()
            .into_iter()
            .filter(|candidate| candidate.from == position)
            .collect()
    }

    pub fn make_move(&mut self, from: Position, to: Position) -> Result<Move, EngineError> {
        self.ensure_in_progress()?;
        let chosen = self
            .valid_moves()
            .into_iter()
            .find(|candidate| candidate.from == from && candidate.to == to)
            .ok_or(EngineError::InvalidMove)?;

        self.apply_move(&chosen);
        Ok(chosen)
    }

    pub fn make_move_notation(&mut self, notation: &str) -> Result<Move, EngineError> {
        self.ensure_in_progress()?;
        let input = MoveInput::from_str(notation)?;
        let chosen = self
            .valid_moves()
            .into_iter()
            .find(|candidate| input.matches(candidate))
            .ok_or(EngineError::InvalidMove)?;

        self.apply_move(&chosen);
        Ok(chosen)
    }

    /// Searches for the side to move at the configured depth and plays the
    /// result.
    pub fn computer_move(&mut self) -> Result<Move, EngineError> {
        self.ensure_in_progress()?;
        let result = best_move(
            &self.board,
            self.config.search_depth,
            self.turn,
            self.turn.maximize_score(),
        );
        let chosen = result.best_move.ok_or(SearchError::NoAvailableMoves)?;
        info!(
            "{} computer plays {} (score {})",
            self.turn, chosen, result.score
        );

        self.last_score = Some(result.score);
        self.apply_move(&chosen);
        Ok(chosen)
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        match self.winner {
            Some(winner) => Err(EngineError::GameOver { winner }),
            None => Ok(()),
        }
    }

    fn apply_move(&mut self, chosen: &Move) {
        self.board = chosen.apply(&self.board);
        self.turn = self.turn.opposite();
        self.check_game_over();
    }

    fn check_game_over(&mut self) {
        if self.valid_moves().is_empty() {
            let winner = self.turn.opposite();
            info!("{} has no legal moves, {} wins", self.turn, winner);
            self.winner = Some(winner);
        }
    }
}
