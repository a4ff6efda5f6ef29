//! Audio cue events emitted by the game state machine.
//!
//! Cues are domain events, not side effects. Transitions return them in
//! emission order and the shell decides how (and whether) to play them.

use super::{Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A named sound event.
///
/// The `Display` form is the cue identifier, which doubles as the asset
/// path stem (`open_cell/3`, `winner/draw`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Cue {
    /// A cell was selected (keypad digit 1-9 in the identifier).
    #[display("open_cell/{}", _0.keypad_digit())]
    OpenCell(Position),
    /// A selection was confirmed and the mark placed.
    #[display("open_cell/success")]
    Success,
    /// An unrecognised key was pressed.
    #[display("open_cell/fail")]
    Fail,
    /// It is now this player's turn.
    #[display("turn/{_0}")]
    Turn(Player),
    /// This player won.
    #[display("winner/{_0}")]
    Winner(Player),
    /// The game ended in a draw.
    #[display("winner/draw")]
    Draw,
}

impl Cue {
    /// The cue identifier.
    pub fn identifier(&self) -> String {
        self.to_string()
    }

    /// Every cue the game can emit.
    pub fn all() -> Vec<Cue> {
        let mut cues: Vec<Cue> = Position::iter().map(Cue::OpenCell).collect();
        cues.push(Cue::Success);
        cues.push(Cue::Fail);
        cues.extend(Player::iter().map(Cue::Turn));
        cues.extend(Player::iter().map(Cue::Winner));
        cues.push(Cue::Draw);
        cues
    }
}
