//! Rendering tests for the terminal front end.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};
use tictactoe::{App, Theme, tui::draw};
use tictactoe_engine::{GameStatus, Player, Position, Square};

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 22)).unwrap();
    terminal
        .draw(|f| draw(f, app, &Theme::default()))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_initial_screen_shows_turn() {
    let mut app = App::new();
    let screen = render(&mut app);
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("X's turn"));
}

#[test]
fn test_win_shown_in_status() {
    let mut app = App::new();
    for c in ['1', '4', '2', '5', '3'] {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.engine().status(), GameStatus::Won(Player::X));
    assert!(render(&mut app).contains("X wins!"));
}

#[test]
fn test_view_mirrors_engine_board() {
    let mut app = App::new();
    for code in [
        KeyCode::Enter,
        KeyCode::Up,
        KeyCode::Enter,
        KeyCode::Left,
        KeyCode::Char(' '),
        KeyCode::Char('9'),
        KeyCode::Char('9'),
    ] {
        press(&mut app, code);
    }
    for pos in Position::ALL {
        let expected = match app.engine().board().get(pos) {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        };
        assert_eq!(app.view().cell(pos), expected, "{pos}");
    }
    assert_eq!(app.view().cell(Position::Center), Some(Player::X));
    assert_eq!(app.view().cell(Position::TopCenter), Some(Player::O));
    assert_eq!(app.view().cell(Position::TopLeft), Some(Player::X));
}

#[test]
fn test_click_after_render_plays_cell() {
    let mut app = App::new();
    render(&mut app);

    let (column, row) = (0..60u16)
        .flat_map(|x| (0..22u16).map(move |y| (x, y)))
        .find(|&(x, y)| app.cell_at(x, y) == Some(Position::Center))
        .expect("center cell is drawn");
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });

    assert_eq!(app.view().cell(Position::Center), Some(Player::X));
    assert!(render(&mut app).contains("O's turn"));
}

#[test]
fn test_restart_after_draw() {
    let mut app = App::new();
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.engine().status(), GameStatus::Draw);
    assert!(render(&mut app).contains("Draw!"));

    press(&mut app, KeyCode::Char('r'));
    assert!(Position::ALL.iter().all(|pos| app.view().cell(*pos).is_none()));
    assert!(render(&mut app).contains("X's turn"));
}

#[test]
fn test_quit_key() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
