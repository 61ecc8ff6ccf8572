use super::app::App;
use super::board_widget::{board_lines, CELL_WIDTH};
use crate::game::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let size = app.game().size() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Header
            Constraint::Min(size * 2 + 2), // Board
            Constraint::Length(3),        // Message
            Constraint::Length(3),        // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_board(frame, app, chunks[1]);
    render_message(frame, app, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn format_clock(secs: u64) -> String {
    format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let game = app.game();
    let status = format!(
        "Score: {}  |  Best: {}  |  Time left: {}",
        game.score(),
        app.best_score().max(game.score()),
        format_clock(app.countdown().remaining())
    );
    let color = match game.state() {
        GameState::Running => Color::Cyan,
        GameState::Won => Color::Green,
        GameState::Lost => Color::Red,
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tile Slide"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    // blank line between rows keeps the grid roughly square
    let mut lines = Vec::new();
    for line in board_lines(app.game().board()) {
        lines.push(line);
        lines.push(Line::from(""));
    }
    lines.pop();

    let width = (app.game().size() * CELL_WIDTH + 2) as u16;
    let height = lines.len() as u16 + 2;
    let board_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    };

    let board_widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, board_area);
}

fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.message().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("Arrows/WASD: Swipe  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
