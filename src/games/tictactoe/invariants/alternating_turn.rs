//! Alternating turn invariant: X moves first and players alternate.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// X has either as many marks as Y or exactly one more, and the player to
/// move follows from the number of placed marks.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let xs = game.board().count(Player::X);
        let ys = game.board().count(Player::Y);

        let balanced = xs == ys || xs == ys + 1;
        let expected_next = if xs == ys { Player::X } else { Player::Y };

        balanced && game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, Y, X, Y, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_single_move_holds() {
        let mut game = GameState::new();
        game.select(Position::Center);
        game.confirm_selection();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::Y);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.board.set(Position::TopLeft, Square::Occupied(Player::X));
        game.board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut game = GameState::new();
        game.current_player = Player::Y;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
