//! Turn sequencing on top of the stateless core: whose move it is, who has
//! won, and when the computer searches.

pub mod engine;
pub mod game_loop;
pub mod position_counter;
