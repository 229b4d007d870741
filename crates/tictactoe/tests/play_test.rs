//! Tests for scripted play.

use tictactoe::play_moves;
use tictactoe_engine::{GameEvent, GameStatus, Player};

fn moves(list: &[&str]) -> Vec<String> {
    list.iter().map(|m| m.to_string()).collect()
}

#[test]
fn test_top_row_win() {
    let report = play_moves(&moves(&["0", "3", "1", "4", "2"]));
    assert_eq!(report.snapshot.status, GameStatus::Won(Player::X));
    assert!(!report.snapshot.active);
    assert!(report.render().ends_with("X wins!"));
}

#[test]
fn test_draw_sequence() {
    let report = play_moves(&moves(&["0", "1", "2", "4", "3", "5", "7", "6", "8"]));
    assert_eq!(report.snapshot.status, GameStatus::Draw);
    assert_eq!(report.snapshot.status_text, "Draw!");
}

#[test]
fn test_labels_accepted() {
    let report = play_moves(&moves(&["center", "top-left"]));
    assert!(report.moves.iter().all(|m| m.accepted));
    assert_eq!(report.snapshot.status_text, "X's turn");
}

#[test]
fn test_repeated_cell_reported_as_ignored() {
    let report = play_moves(&moves(&["5", "5"]));
    assert!(report.moves[0].accepted);
    assert!(!report.moves[1].accepted);
    assert_eq!(
        report.moves[1].note.as_deref(),
        Some("Middle-right is already taken")
    );
    assert_eq!(report.snapshot.status_text, "O's turn");
    assert!(report.render().contains("ignored '5'"));
}

#[test]
fn test_garbage_and_out_of_range_ignored() {
    let report = play_moves(&moves(&["banana", "9"]));
    assert_eq!(report.moves[0].note.as_deref(), Some("not a board position"));
    assert_eq!(report.moves[1].note.as_deref(), Some("Index 9 is off the board"));
    assert_eq!(report.snapshot.status_text, "X's turn");
}

#[test]
fn test_events_start_with_turn_and_end_with_result() {
    let report = play_moves(&moves(&["0", "3", "1", "4", "2"]));
    assert_eq!(
        report.events.first(),
        Some(&GameEvent::StatusChanged {
            text: "X's turn".to_string(),
        })
    );
    assert_eq!(
        report.events.last(),
        Some(&GameEvent::StatusChanged {
            text: "X wins!".to_string(),
        })
    );
}

#[test]
fn test_report_serializes() {
    let report = play_moves(&moves(&["4"]));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["moves"][0]["accepted"], true);
    assert!(json["moves"][0].get("note").is_none());
    assert_eq!(json["events"][1]["type"], "CellFilled");
}
