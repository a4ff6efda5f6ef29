//! Stateless UI rendering for the game view.

mod board;

use crate::games::tictactoe::{GameState, Phase, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub use board::{render_board, BOARD_HEIGHT, BOARD_WIDTH};

/// Label of the reset control.
pub const RESET_LABEL: &str = "Reset Game";

/// Key help shown under the board.
pub const HELP_TEXT: &str = "1-9: select | Enter: confirm | 0: reset | Esc: quit";

/// What a screen coordinate lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// The reset control.
    Reset,
}

/// Screen regions from the last rendered frame, used for pointer input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardLayout {
    /// Cell regions in row-major order.
    pub cells: [Rect; 9],
    /// Region of the reset control.
    pub reset: Rect,
}

impl BoardLayout {
    /// Finds what lies under `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if contains(self.reset, column, row) {
            return Some(Hit::Reset);
        }
        Position::ALL
            .into_iter()
            .zip(self.cells)
            .find(|(_, area)| contains(*area, column, row))
            .map(|(pos, _)| Hit::Cell(pos))
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Renders the whole game view and returns the clickable regions.
pub fn draw(frame: &mut Frame, game: &GameState) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Length(3),         // Notification
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Reset control
            Constraint::Length(1),         // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let notification_style = match game.phase() {
        Phase::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Phase::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Phase::Selected(_) | Phase::Idle => Style::default().fg(Color::Yellow),
    };
    let notification = Paragraph::new(game.notification())
        .style(notification_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(notification, chunks[1]);

    let cells = render_board(frame, chunks[2], game);

    let reset = center_rect(chunks[3], RESET_LABEL.len() as u16 + 4, 3);
    let button = Paragraph::new(RESET_LABEL)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, reset);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    BoardLayout { cells, reset }
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_prefers_cells_by_position() {
        let mut cells = [Rect::default(); 9];
        cells[4] = Rect::new(10, 10, 5, 3);
        let layout = BoardLayout {
            cells,
            reset: Rect::new(0, 20, 10, 3),
        };
        assert_eq!(layout.hit(12, 11), Some(Hit::Cell(Position::Center)));
        assert_eq!(layout.hit(15, 11), None);
        assert_eq!(layout.hit(9, 22), Some(Hit::Reset));
    }

    #[test]
    fn test_center_rect_is_centered() {
        let area = Rect::new(0, 0, 40, 20);
        let centered = center_rect(area, 10, 4);
        assert_eq!(centered, Rect::new(15, 8, 10, 4));
    }
}
