//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the state machine and the renderer can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, LINES};

use super::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// A complete line wins for the mark on it; otherwise a full board is a
/// draw; otherwise the game is still in progress.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
