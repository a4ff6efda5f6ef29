//! Tic-tac-toe board rendering.

use super::center_rect;
use crate::games::tictactoe::{rules, GameState, Player, Position, Square};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width the board occupies, separators included.
pub const BOARD_WIDTH: u16 = 40;
/// Height the board occupies, separators included.
pub const BOARD_HEIGHT: u16 = 11;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;

/// Renders the board centered in `area` and returns the cell regions.
pub fn render_board(frame: &mut Frame, area: Rect, game: &GameState) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let winning = rules::winning_line(game.board());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let cols: Vec<_> = [0, 2, 4]
        .into_iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(rows[row])
        })
        .collect();

    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        let area = cols[pos.row()][pos.col() * 2];
        let highlight = if winning.is_some_and(|line| line.contains(&pos)) {
            CellHighlight::Winning
        } else if game.selection() == Some(pos) {
            CellHighlight::Selected
        } else {
            CellHighlight::None
        };
        render_cell(frame, area, game.board().get(pos), highlight);
        cells[pos.to_index()] = area;

        if pos.col() < 2 {
            render_vertical_sep(frame, cols[pos.row()][pos.col() * 2 + 1]);
        }
    }
    for sep in [1, 3] {
        render_separator(frame, rows[sep]);
    }

    cells
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellHighlight {
    None,
    Selected,
    Winning,
}

fn render_cell(frame: &mut Frame, area: Rect, square: Square, highlight: CellHighlight) {
    let (symbol, base_style) = match square {
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::Y) => (
            "Y".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match highlight {
        CellHighlight::Selected => base_style.bg(Color::White).fg(Color::Black),
        CellHighlight::Winning => base_style.bg(Color::Green).fg(Color::Black),
        CellHighlight::None => base_style,
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ])
    .style(style)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
