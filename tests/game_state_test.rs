//! Tests for the select/confirm game state machine.

use audible_tictactoe::{Cue, GameState, GameStatus, Phase, Player, Position, Square};

fn play(game: &mut GameState, cells: &[usize]) -> Vec<Cue> {
    let mut cues = Vec::new();
    for &cell in cells {
        cues.extend(game.select_cell(cell));
        cues.extend(game.confirm_selection());
    }
    cues
}

#[test]
fn test_select_occupied_cell_is_ignored() {
    let mut game = GameState::new();
    play(&mut game, &[4]);
    game.select_cell(0);
    let before = game.clone();

    let cues = game.select_cell(4);

    assert!(cues.is_empty());
    assert_eq!(game, before);
    assert_eq!(game.selection(), Some(Position::TopLeft));
}

#[test]
fn test_select_out_of_range_is_ignored() {
    let mut game = GameState::new();
    game.select_cell(3);
    let before = game.clone();

    for index in [9, 10, usize::MAX] {
        assert!(game.select_cell(index).is_empty());
    }
    assert_eq!(game, before);
}

#[test]
fn test_confirm_without_selection_is_noop() {
    let mut game = GameState::new();
    play(&mut game, &[0, 8]);
    let before = game.clone();

    assert!(game.confirm_selection().is_empty());
    assert_eq!(game, before);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = GameState::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert!(game.is_terminal());

    game.reset();

    assert_eq!(game, GameState::new());
    assert!(game.board().squares().iter().all(|sq| *sq == Square::Empty));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.selection(), None);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = GameState::new();
    play(&mut once, &[4, 0]);
    once.select_cell(8);
    let mut twice = once.clone();

    once.reset();
    twice.reset();
    twice.reset();

    assert_eq!(once, twice);
}

#[test]
fn test_top_row_win_is_immediate() {
    let mut game = GameState::new();
    // X: 0, 1  Y: 3, 4
    play(&mut game, &[0, 3, 1, 4]);
    game.select_cell(2);

    let cues = game.confirm_selection();

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.phase(), Phase::Won(Player::X));
    assert_eq!(cues, vec![Cue::Success, Cue::Winner(Player::X)]);
    assert_eq!(game.notification(), "Player X wins!");
}

#[test]
fn test_no_moves_after_win() {
    let mut game = GameState::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.clone();

    assert!(game.select_cell(8).is_empty());
    assert!(game.confirm_selection().is_empty());
    assert_eq!(game, before);
}

#[test]
fn test_second_player_can_win() {
    let mut game = GameState::new();
    // X: 0, 1, 8  Y: 2, 4, 6 (anti-diagonal)
    let cues = play(&mut game, &[0, 2, 1, 4, 8, 6]);
    assert_eq!(game.status(), GameStatus::Won(Player::Y));
    assert_eq!(cues.last(), Some(&Cue::Winner(Player::Y)));
    assert_eq!(game.notification(), "Player Y wins!");
}

#[test]
fn test_draw_detection() {
    let mut game = GameState::new();
    // X Y X
    // X Y Y
    // Y X X
    let cues = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.phase(), Phase::Draw);
    assert_eq!(cues.last(), Some(&Cue::Draw));
    assert_eq!(game.notification(), "It's a draw!");

    let before = game.clone();
    assert!(game.select_cell(0).is_empty());
    assert!(game.confirm_selection().is_empty());
    assert_eq!(game, before);
}

#[test]
fn test_full_game_cue_sequence() {
    let mut game = GameState::new();
    let cues = play(&mut game, &[4, 0]);
    assert_eq!(
        cues,
        vec![
            Cue::OpenCell(Position::Center),
            Cue::Success,
            Cue::Turn(Player::Y),
            Cue::OpenCell(Position::TopLeft),
            Cue::Success,
            Cue::Turn(Player::X),
        ]
    );
}

#[test]
fn test_history_tracks_placements() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8]);
    assert_eq!(
        game.history(),
        &[Position::Center, Position::TopLeft, Position::BottomRight]
    );
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::Y));
}

#[test]
fn test_evaluate_outcome_is_pure() {
    let mut game = GameState::new();
    play(&mut game, &[0, 3, 1]);
    game.select_cell(4);
    let before = game.clone();

    assert_eq!(game.evaluate_outcome(), GameStatus::InProgress);
    assert_eq!(game, before);
}
