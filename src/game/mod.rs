mod engine;
mod player;
mod scoreboard;
mod turn;

pub use engine::*;
pub use player::*;
pub use scoreboard::*;
pub use turn::*;
