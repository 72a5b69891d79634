//! Play command - play a game against the computer.

use checkers::board::side::Side;
use checkers::board::Board;
use checkers::game::game_loop::GameLoop;
use structopt::StructOpt;

use super::util::{create_engine, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "white")]
    pub color: Side,
    #[structopt(long = "position")]
    pub starting_position: Option<Board>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let starting_position = self
            .starting_position
            .unwrap_or_else(Board::starting_position);
        let engine = create_engine(self.depth, starting_position, Side::White);

        println!(
            "You play {}. Enter moves like `a3-b4` or `c3xe5xg3`, a square such as `c3` to see its moves, `moves` for every legal move, or `quit`.",
            self.color
        );
        run_game_loop(GameLoop::new(engine, Some(self.color)));
    }
}
