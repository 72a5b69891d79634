//! Shared utilities for CLI commands.

use std::io;
use std::process;

use checkers::board::side::Side;
use checkers::board::Board;
use checkers::game::engine::{Engine, EngineConfig};
use checkers::game::game_loop::GameLoop;

pub(crate) fn create_engine(depth: u8, starting_position: Board, starting_side: Side) -> Engine {
    let config = EngineConfig {
        search_depth: depth,
        starting_position,
        starting_side,
    };
    match Engine::with_config(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

pub(crate) fn run_game_loop(mut game: GameLoop) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = game.run(stdin.lock(), stdout.lock()) {
        eprintln!("I/O error: {}", err);
        process::exit(1);
    }
}
