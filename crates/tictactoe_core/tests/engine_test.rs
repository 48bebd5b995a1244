//! End-to-end games through the public engine loop.

use tictactoe_core::{
    Board, ClearCounter, GameStatus, Mark, Player, ScriptedInput, TITLE, Transcript, render, run,
};

#[test]
fn test_first_screen_is_empty_board_for_player_one() {
    let mut expected = Transcript::new();
    render(&mut expected, &Board::new(), Some(Player::One), None).unwrap();

    let mut out = Transcript::new();
    let mut input = ScriptedInput::new(["1", "2", "4", "3", "7"]);
    run(&mut out, &mut input, None).unwrap();

    assert!(out.as_str().starts_with(expected.as_str()));
}

#[test]
fn test_player_two_wins_on_anti_diagonal() {
    let mut out = Transcript::new();
    let mut input = ScriptedInput::new(["1", "3", "2", "5", "9", "7"]);
    let status = run(&mut out, &mut input, None).unwrap();
    assert_eq!(status, GameStatus::Won(Mark::O));
    assert_eq!(status.winner(), Some(Player::Two));
    assert!(out.as_str().ends_with("\nWinner is: Player 2."));
}

#[test]
fn test_final_render_has_no_turn_prompt() {
    let mut out = Transcript::new();
    let mut input = ScriptedInput::new(["1", "2", "3", "5", "4", "6", "8", "7", "9"]);
    let mut clear = ClearCounter::default();
    let status = run(&mut out, &mut input, Some(&mut clear)).unwrap();
    assert_eq!(status, GameStatus::Draw);

    let last_title = out.as_str().rfind(TITLE).unwrap();
    let final_screen = &out.as_str()[last_title..];
    assert!(!final_screen.contains("Turn:"));
    assert_eq!(
        final_screen,
        "Tic Tac Toe\n\n X | O | X \n-----------\n X | O | O \n-----------\n O | X | X \n\nWinner is: No one."
    );
}

#[test]
fn test_input_after_game_end_is_not_read() {
    let mut out = Transcript::new();
    let mut input = ScriptedInput::new(["1", "2", "4", "3", "7", "9", "8"]);
    run(&mut out, &mut input, None).unwrap();
    assert_eq!(input.consumed(), 5);
    assert_eq!(input.remaining(), 2);
}
