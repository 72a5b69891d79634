use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use log::debug;

use crate::board::side::Side;
use crate::input_handler::parse_square;

use super::engine::Engine;

/// Runs a game in plain text: the board is printed before every move,
/// the human side reads moves from `input`, the other side searches.
pub struct GameLoop {
    engine: Engine,
    human_side: Option<Side>,
    delay: Duration,
    max_plies: Option<usize>,
}

impl GameLoop {
    /// `human_side = None` lets the computer play both sides.
    pub fn new(engine: Engine, human_side: Option<Side>) -> Self {
        Self {
            engine,
            human_side,
            delay: Duration::from_millis(0),
            max_plies: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Stops an undecided game after this many plies.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Plays until a side has no legal moves, the human quits, the input
    /// ends, or the ply limit is reached. Returns the winner, if any.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<Option<Side>> {
        let mut plies = 0;

        loop {
            writeln!(output, "{}\n", self.engine.board())?;

            if let Some(winner) = self.engine.winner() {
                writeln!(output, "{} has no moves left, {} wins!", winner.opposite(), winner)?;
                return Ok(Some(winner));
            }

            if self.max_plies.map_or(false, |max| plies >= max) {
                writeln!(output, "stopping after {} plies without a winner", plies)?;
                return Ok(None);
            }

            let turn = self.engine.turn();
            if self.human_side == Some(turn) {
                write!(output, "{} to move: ", turn)?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(None);
                }

                match line.trim() {
                    "quit" => return Ok(None),
                    "moves" => {
                        let moves = self.engine.valid_moves();
                        let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                        writeln!(output, "legal moves: {}", listed.join(", "))?;
                        continue;
                    }
                    command => {
                        if let Ok(square) = parse_square(command) {
                            let moves = self.engine.piece_moves(square);
                            let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                            writeln!(output, "moves from {}: {}", square, listed.join(", "))?;
                            continue;
                        }

                        match self.engine.make_move_notation(command) {
                            Ok(played) => writeln!(output, "{} plays {}", turn, played)?,
                            Err(error) => {
                                writeln!(output, "move error: {}", error)?;
                                continue;
                            }
                        }
                    }
                }
            } else {
                match self.engine.computer_move() {
                    Ok(played) => {
                        let score = self.engine.last_score().unwrap_or_default();
                        writeln!(output, "{} plays {} (score {})", turn, played, score)?;
                    }
                    Err(error) => {
                        writeln!(output, "search error: {}", error)?;
                        return Ok(None);
                    }
                }
                if !self.delay.is_zero() {
                    thread::sleep(self.delay);
                }
            }

            plies += 1;
            debug!("ply {} played", plies);
        }
    }
}
