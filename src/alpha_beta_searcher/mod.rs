//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximizes and Black minimizes the score from `evaluate`. Every
//! node works on its own board produced by the move applier, so sibling
//! branches never observe each other's positions. Moves are searched in
//! generation order and the first move reaching the best score is kept,
//! which makes the result deterministic.

use log::{debug, info, trace};
use thiserror::Error;

use crate::board::side::Side;
use crate::board::Board;
use crate::checkers_move::Move;
use crate::evaluate::evaluate;
use crate::move_generator::legal_moves;


/// Score of a position where White has no legal move.
pub const SCORE_NEG_INFINITY: i32 = -i32::MAX;
/// Score of a position where Black has no legal move.
pub const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SearchResult {
    pub score: i32,
    /// `None` at depth 0, or when the side to move has no legal move.
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Node counters for a single search.
#[derive(Default, Debug)]
struct SearchStats {
    position_count: usize,
    termination_count: usize,
}

/// Searches `depth` plies ahead for `side`. `maximizing` must be true
/// exactly when `side` is White.
pub fn best_move(board: &Board, depth: u8, side: Side, maximizing: bool) -> SearchResult {
    let mut stats = SearchStats::default();
    alpha_beta(
        board,
        depth,
        side,
        maximizing,
        SCORE_NEG_INFINITY,
        SCORE_INFINITY,
        &mut stats,
    )
}

/// Full-width minimax without pruning. Returns the same score, and the
/// same move, as `best_move`.
pub fn minimax(board: &Board, depth: u8, side: Side, maximizing: bool) -> SearchResult {
    let mut stats = SearchStats::default();
    full_width(board, depth, side, maximizing, &mut stats)
}

fn alpha_beta(
    board: &Board,
    depth: u8,
    side: Side,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> SearchResult {
    debug_assert_eq!(
        side.maximize_score(),
        maximizing,
        "{} cannot search with maximizing = {}",
        side,
        maximizing
    );
    stats.position_count += 1;

    if depth == 0 {
        return SearchResult::leaf(evaluate(board));
    }

    let candidates = legal_moves(board, side);
    if candidates.is_empty() {
        return SearchResult::leaf(losing_score(maximizing));
    }

    let mut best = SearchResult::leaf(losing_score(maximizing));
    for candidate in candidates {
        let next = candidate.apply(board);
        let score = alpha_beta(
            &next,
            depth - 1,
            side.opposite(),
            !maximizing,
            alpha,
            beta,
            stats,
        )
        .score;

        if best.best_move.is_none() || improves(score, best.score, maximizing) {
            best = SearchResult {
                score,
                best_move: Some(candidate),
            };
        }

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.termination_count += 1;
            trace!("cutoff at depth {} (alpha {}, beta {})", depth, alpha, beta);
            break;
        }
    }

    best
}

fn full_width(
    board: &Board,
    depth: u8,
    side: Side,
    maximizing: bool,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.position_count += 1;

    if depth == 0 {
        return SearchResult::leaf(evaluate(board));
    }

    let candidates = legal_moves(board, side);
    if candidates.is_empty() {
        return SearchResult::leaf(losing_score(maximizing));
    }

    let mut best = SearchResult::leaf(losing_score(maximizing));
    for candidate in candidates {
        let next = candidate.apply(board);
        let score = full_width(&next, depth - 1, side.opposite(), !maximizing, stats).score;
        if best.best_move.is_none() || improves(score, best.score, maximizing) {
            best = SearchResult {
                score,
                best_move: Some(candidate),
            };
        }
    }

    best
}

#[inline(always)]
fn losing_score(maximizing: bool) -> i32 {
    if maximizing {
        SCORE_NEG_INFINITY
    } else {
        SCORE_INFINITY
    }
}

/// Strict comparison: equal scores keep the earlier move.
#[inline(always)]
fn improves(score: i32, best: i32, maximizing: bool) -> bool {
    if maximizing {
        score > best
    } else {
        score < best
    }
}

/// Search entry point for callers that need a move, with statistics from
/// the last search.
pub struct AlphaBetaSearcher {
    search_depth: u8,
    searched_position_count: usize,
    termination_count: usize,
}

impl AlphaBetaSearcher {
    pub fn new(depth: u8) -> Self {
        Self {
            search_depth: depth,
            searched_position_count: 0,
            termination_count: 0,
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.search_depth = depth;
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Searches for `side`, which also decides the maximizing role.
    pub fn search(&mut self, board: &Board, side: Side) -> Result<SearchResult, SearchError> {
        self.run(board, side, true)
    }

    /// Like `search` but without pruning, for comparing node counts.
    pub fn search_full_width(
        &mut self,
        board: &Board,
        side: Side,
    ) -> Result<SearchResult, SearchError> {
        self.run(board, side, false)
    }

    fn run(&mut self, board: &Board, side: Side, prune: bool) -> Result<SearchResult, SearchError> {
        self.reset_stats();

        if self.search_depth == 0 {
            return Err(SearchError::DepthTooLow);
        }

        debug!(
            "{} search depth: {}",
            if prune { "alpha-beta" } else { "minimax" },
            self.search_depth
        );
        let mut stats = SearchStats::default();
        let maximizing = side.maximize_score();
        let result = if prune {
            alpha_beta(
                board,
                self.search_depth,
                side,
                maximizing,
                SCORE_NEG_INFINITY,
                SCORE_INFINITY,
                &mut stats,
            )
        } else {
            full_width(board, self.search_depth, side, maximizing, &mut stats)
        };
        self.searched_position_count = stats.position_count;
        self.termination_count = stats.termination_count;

        match &result.best_move {
            Some(chosen) => info!(
                "{} plays {} (score {}, {} positions, {} cutoffs)",
                side, chosen, result.score, stats.position_count, stats.termination_count
            ),
            None => return Err(SearchError::NoAvailableMoves),
        }
        Ok(result)
    }
}
