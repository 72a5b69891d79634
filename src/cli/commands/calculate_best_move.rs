//! Calculate best move command - determine the best move from a position.

use checkers::alpha_beta_searcher::best_move;
use checkers::board::side::Side;
use checkers::board::Board;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
    #[structopt(short, long, default_value = "black")]
    pub side: Side,
    #[structopt(long = "position")]
    pub starting_position: Board,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let result = best_move(
            &self.starting_position,
            self.depth,
            self.side,
            self.side.maximize_score(),
        );

        match result.best_move {
            Some(chosen) => println!("{} (score {})", chosen, result.score),
            None if self.depth == 0 => println!("no search at depth 0 (score {})", result.score),
            None => eprintln!("There are no valid moves in the given position."),
        }
    }
}
