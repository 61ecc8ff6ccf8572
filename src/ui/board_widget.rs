use crate::game::{tile_value, Board};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of one rendered cell, padding included.
pub const CELL_WIDTH: usize = 7;

/// Foreground colour for a tile exponent
fn tile_color(exponent: u8) -> Color {
    match exponent {
        0 => Color::DarkGray,
        1 | 2 => Color::White,
        3 | 4 => Color::Yellow,
        5 | 6 => Color::LightRed,
        7..=10 => Color::LightYellow,
        _ => Color::LightMagenta,
    }
}

/// Board rows as styled lines, one text line per board row.
pub fn board_lines(board: &Board) -> Vec<Line<'static>> {
    board
        .rows()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .map(|&exponent| {
                    let label = if exponent == 0 {
                        ".".to_string()
                    } else {
                        tile_value(exponent).to_string()
                    };
                    let mut style = Style::default().fg(tile_color(exponent));
                    if exponent > 0 {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Span::styled(format!("{:^width$}", label, width = CELL_WIDTH), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
