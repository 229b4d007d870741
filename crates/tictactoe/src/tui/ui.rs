//! UI rendering using ratatui.

use super::app::App;
use crate::config::TuiConfig;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Player, Position};

/// Colours and hints taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Colour of X marks.
    pub x_color: Color,
    /// Colour of O marks.
    pub o_color: Color,
    /// Show 1-9 in empty cells.
    pub show_cell_numbers: bool,
}

impl Theme {
    /// Builds a theme from configuration.
    pub fn from_config(config: &TuiConfig) -> Self {
        Self {
            x_color: config.x_style_color(),
            o_color: config.o_style_color(),
            show_cell_numbers: *config.show_cell_numbers(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&TuiConfig::default())
    }
}

/// Draws the main UI and records the cell areas for mouse input.
pub fn draw(frame: &mut Frame, app: &mut App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let areas = cell_areas(chunks[1]);
    draw_grid(frame, &areas);
    let highlight = app.engine().winning_line();
    for pos in Position::ALL {
        let winning = highlight.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, areas[pos.to_index()], app, pos, theme, winning);
    }
    app.set_cell_areas(areas);

    let mut status = vec![Span::styled(
        app.view().status().to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(notice) = app.notice() {
        status.push(Span::styled(
            format!("  ({notice})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let status = Paragraph::new(Line::from(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9 / arrows+enter / click: move   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Splits the board area into nine 3-row cells with one-cell gutters.
fn cell_areas(area: Rect) -> [Rect; 9] {
    let board = center_rect(area, 29, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board);

    let mut areas = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
            ])
            .split(row_area);
        for (col, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            areas[row * 3 + col] = col_area;
        }
    }
    areas
}

fn draw_grid(frame: &mut Frame, cells: &[Rect; 9]) {
    let style = Style::default().fg(Color::DarkGray);
    let bounds = frame.area();
    for row in 0..2 {
        let above = cells[row * 3];
        let right = cells[row * 3 + 2];
        let width = (right.x + right.width).saturating_sub(above.x);
        let sep = Rect::new(above.x, above.y + above.height, width, 1).intersection(bounds);
        let line = Paragraph::new("─".repeat(width as usize)).style(style);
        frame.render_widget(line, sep);
    }
    for col in 0..2 {
        let top = cells[col];
        let bottom = cells[6 + col];
        let height = (bottom.y + bottom.height).saturating_sub(top.y);
        let sep = Rect::new(top.x + top.width, top.y, 1, height).intersection(bounds);
        let lines: Vec<Line> = (0..height).map(|_| Line::from("│")).collect();
        frame.render_widget(Paragraph::new(lines).style(style), sep);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    pos: Position,
    theme: &Theme,
    winning: bool,
) {
    let (symbol, mut style) = match app.view().cell(pos) {
        None if theme.show_cell_numbers => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        None => (String::new(), Style::default()),
        Some(Player::X) => (
            "X".to_string(),
            Style::default()
                .fg(theme.x_color)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg(theme.o_color)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if winning {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if pos == app.cursor() && !app.engine().status().is_terminal() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically centre the symbol in the 3-row cell.
    let lines = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
