//! Keyboard and mouse input for the game view.

use super::ui::{BoardLayout, Hit};
use crate::games::tictactoe::Position;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

/// How long the reader waits for an event before rechecking for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What an input event asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select a cell.
    Select(Position),
    /// Confirm the selected cell.
    Confirm,
    /// Start over.
    Reset,
    /// Leave the game view.
    Quit,
    /// A key with no meaning; answered with the fail cue.
    Unrecognized,
}

/// Maps a key press to an action.
///
/// Digits `1`-`9` select, `Enter` confirms, `0` resets, `Esc` and `Ctrl+C`
/// quit. Anything else is [`Action::Unrecognized`]. Releases and repeats
/// return `None`.
#[instrument]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Char('0') => Action::Reset,
        KeyCode::Char(c) => match Position::from_keypad(c) {
            Some(pos) => Action::Select(pos),
            None => Action::Unrecognized,
        },
        _ => Action::Unrecognized,
    };
    Some(action)
}

/// Maps a mouse event to an action using the last rendered layout.
///
/// Only left-button presses on a cell or on the reset control count.
#[instrument(skip(layout))]
pub fn action_for_mouse(mouse: MouseEvent, layout: &BoardLayout) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    match layout.hit(mouse.column, mouse.row)? {
        Hit::Cell(pos) => Some(Action::Select(pos)),
        Hit::Reset => Some(Action::Reset),
    }
}

/// Terminal input subscription owned by the game view.
///
/// A blocking reader task forwards terminal events through a channel.
/// Dropping the subscription stops the reader within one poll interval.
pub struct InputSubscription {
    events: mpsc::UnboundedReceiver<Event>,
    stop: Arc<AtomicBool>,
}

impl InputSubscription {
    /// Starts reading terminal events. Must be called within a Tokio runtime.
    #[instrument]
    pub fn subscribe() -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let reader_stop = Arc::clone(&stop);

        tokio::task::spawn_blocking(move || {
            debug!("Input reader started");
            while !reader_stop.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => match event::read() {
                        Ok(ev) => {
                            if tx.send(ev).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "Failed to read terminal event");
                            break;
                        }
                    },
                    Err(e) => {
                        warn!(error = %e, "Failed to poll terminal events");
                        break;
                    }
                }
            }
            debug!("Input reader stopped");
        });

        Self { events, stop }
    }

    /// Waits for the next event. `None` once the reader has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.events.recv().await
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        debug!("Unsubscribing from terminal input");
        self.stop.store(true, Ordering::Relaxed);
        self.events.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn layout() -> BoardLayout {
        let mut cells = [Rect::default(); 9];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = Rect::new((i % 3) as u16 * 10, (i / 3) as u16 * 4, 9, 3);
        }
        BoardLayout {
            cells,
            reset: Rect::new(0, 20, 16, 3),
        }
    }

    #[test]
    fn test_digits_select() {
        assert_eq!(
            action_for_key(press(KeyCode::Char('1'))),
            Some(Action::Select(Position::TopLeft))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('9'))),
            Some(Action::Select(Position::BottomRight))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key(press(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(action_for_key(press(KeyCode::Char('0'))), Some(Action::Reset));
        assert_eq!(action_for_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_other_keys_unrecognized() {
        for code in [KeyCode::Char('q'), KeyCode::Char('c'), KeyCode::Tab, KeyCode::Left] {
            assert_eq!(action_for_key(press(code)), Some(Action::Unrecognized));
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for_key(release), None);
    }

    #[test]
    fn test_click_on_cell_selects() {
        assert_eq!(
            action_for_mouse(click(12, 5), &layout()),
            Some(Action::Select(Position::Center))
        );
    }

    #[test]
    fn test_click_on_reset() {
        assert_eq!(action_for_mouse(click(3, 21), &layout()), Some(Action::Reset));
    }

    #[test]
    fn test_click_elsewhere_ignored() {
        assert_eq!(action_for_mouse(click(60, 60), &layout()), None);
        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click(12, 5)
        };
        assert_eq!(action_for_mouse(right_click, &layout()), None);
    }
}
