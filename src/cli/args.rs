//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "checkers",
    about = "A forced-capture checkers engine implemented in Rust ⛀"
)]
pub enum Checkers {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move using alpha-beta pruning at the given `--depth` (2-8, default: 6). You play White unless you choose otherwise with `--color`. The initial position can be given as a board diagram with `--position` (default: starting position)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the engine to determine the best move from a given position, provided as a board diagram with `--position` (required), for the side given with `--side` (default: black). You can optionally specify the depth of the search with the `--depth` arg (default: 6)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of possible positions for a given `--depth` (default: 4), and reports the time it took to do so. By default, this counts all possible positions. The routine can be run with a search by selecting `--strategy alpha-beta` or `--strategy minimax`."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Checkers {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
