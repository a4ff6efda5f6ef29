//! Selection invariant: only empty squares of a live game are selectable.

use super::super::GameState;
use super::Invariant;

/// Invariant: A selection points at an empty square and never survives
/// the end of the game.
pub struct SelectionValidInvariant;

impl Invariant<GameState> for SelectionValidInvariant {
    fn holds(game: &GameState) -> bool {
        match game.selection() {
            None => true,
            Some(pos) => !game.is_terminal() && game.board().is_empty(pos),
        }
    }

    fn description() -> &'static str {
        "Selection is an empty square of an unfinished game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Player, Position, Square};

    #[test]
    fn test_selection_on_empty_square_holds() {
        let mut game = GameState::new();
        game.select(Position::Center);
        assert!(SelectionValidInvariant::holds(&game));
    }

    #[test]
    fn test_selection_on_occupied_square_violates() {
        let mut game = GameState::new();
        game.select(Position::Center);
        game.board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!SelectionValidInvariant::holds(&game));
    }

    #[test]
    fn test_selection_after_game_over_violates() {
        let mut game = GameState::new();
        game.select(Position::Center);
        game.status = GameStatus::Draw;
        assert!(!SelectionValidInvariant::holds(&game));
    }
}
