//! Watch command - watch the computer play against itself.

use std::time::Duration;

use checkers::board::side::Side;
use checkers::board::Board;
use checkers::game::game_loop::GameLoop;
use structopt::StructOpt;

use super::util::{create_engine, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long = "position")]
    pub starting_position: Option<Board>,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(
        long = "max-plies",
        default_value = "200",
        help = "Stop an undecided game after this many plies"
    )]
    pub max_plies: usize,
}

impl Command for WatchArgs {
    fn execute(self) {
        let starting_position = self
            .starting_position
            .unwrap_or_else(Board::starting_position);
        let engine = create_engine(self.depth, starting_position, Side::White);
        let game = GameLoop::new(engine, None)
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_max_plies(self.max_plies);
        run_game_loop(game);
    }
}
