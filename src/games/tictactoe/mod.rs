//! Tic-tac-toe with two-step moves: select a cell, then confirm it.

mod cue;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use cue::Cue;
pub use position::Position;
pub use state::{GameState, Phase};
pub use types::{Board, GameStatus, Player, Square};
