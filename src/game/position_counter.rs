use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::alpha_beta_searcher::AlphaBetaSearcher;
use crate::board::side::Side;
use crate::board::Board;
use crate::move_generator::MoveGenerator;

#[derive(Debug, PartialEq)]
pub enum CountPositionsStrategy {
    All,
    AlphaBeta,
    Minimax,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            "minimax" => Ok(CountPositionsStrategy::Minimax),
            _ => Err("invalid strategy; options are: all, alpha-beta, minimax"),
        }
    }
}

/// Positions visited over `depth` plies from the starting position with
/// White to move, the root included. Depth 0 counts nothing.
pub fn count_positions(depth: u8, strategy: &CountPositionsStrategy) -> usize {
    let board = Board::starting_position();
    match strategy {
        CountPositionsStrategy::All => depth.checked_sub(1).map_or(0, |plies| {
            1 + MoveGenerator::new().count_positions(plies, &board, Side::White)
        }),
        CountPositionsStrategy::AlphaBeta | CountPositionsStrategy::Minimax => {
            let mut searcher = AlphaBetaSearcher::new(depth);
            let searched = if *strategy == CountPositionsStrategy::AlphaBeta {
                searcher.search(&board, Side::White)
            } else {
                searcher.search_full_width(&board, Side::White)
            };
            // Depth 0 is rejected by the searcher and counts nothing.
            searched.map_or(0, |_| searcher.searched_position_count())
        }
    }
}

pub fn run_count_positions(depth: u8, strategy: CountPositionsStrategy) {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in 1..=depth {
        let starting_time = Instant::now();
        let count = count_positions(depth, &strategy);
        let duration = starting_time.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            CountPositionsStrategy::from_str("alpha-beta"),
            Ok(CountPositionsStrategy::AlphaBeta)
        );
        assert!(CountPositionsStrategy::from_str("random").is_err());
    }

    #[test]
    fn test_all_and_minimax_count_the_same_tree() {
        assert_eq!(count_positions(0, &CountPositionsStrategy::All), 0);
        assert_eq!(count_positions(1, &CountPositionsStrategy::All), 1 + 7);
        assert_eq!(count_positions(2, &CountPositionsStrategy::All), 1 + 7 + 49);
        for depth in 1..=3 {
            assert_eq!(
                count_positions(depth, &CountPositionsStrategy::All),
                count_positions(depth, &CountPositionsStrategy::Minimax),
                "depth {}",
                depth
            );
        }
    }

    #[test]
    fn test_pruning_visits_no_more_positions() {
        let all = count_positions(3, &CountPositionsStrategy::Minimax);
        let pruned = count_positions(3, &CountPositionsStrategy::AlphaBeta);
        assert!(pruned <= all);
    }
}
