//! Application state and logic.

use super::input::{action_for_key, action_for_mouse, Action};
use super::ui::BoardLayout;
use crate::audio::AudioCue;
use crate::games::tictactoe::{Cue, GameState};
use crossterm::event::{Event, KeyEvent, MouseEvent};
use tracing::{debug, info, instrument, warn};

/// Main application state: one game, one audio sink.
///
/// Every action runs to completion, state first, then its cues.
pub struct App<A: AudioCue> {
    game: GameState,
    audio: A,
    layout: BoardLayout,
    mounted: bool,
    should_quit: bool,
}

impl<A: AudioCue> App<A> {
    /// Creates a new application around an audio sink.
    #[instrument(skip(audio))]
    pub fn new(audio: A) -> Self {
        Self {
            game: GameState::new(),
            audio,
            layout: BoardLayout::default(),
            mounted: false,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the audio sink.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Gets the audio sink mutably.
    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True once a frame has been drawn.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Records the layout of the frame just drawn.
    ///
    /// Cues are only played after the first frame.
    pub fn mount(&mut self, layout: BoardLayout) {
        if !self.mounted {
            debug!("Game view mounted, audio enabled");
        }
        self.layout = layout;
        self.mounted = true;
    }

    /// Handles a terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for_key(key) {
            self.apply(action);
        }
    }

    /// Handles a mouse event against the last rendered layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let Some(action) = action_for_mouse(mouse, &self.layout) {
            self.apply(action);
        }
    }

    /// Applies an action to the game and plays the resulting cues.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        let cues = match action {
            Action::Select(pos) => self.game.select(pos),
            Action::Confirm => self.game.confirm_selection(),
            Action::Reset => {
                self.game.reset();
                Vec::new()
            }
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                Vec::new()
            }
            Action::Unrecognized => vec![Cue::Fail],
        };
        self.play(cues);
    }

    fn play(&mut self, cues: Vec<Cue>) {
        if !self.mounted {
            if !cues.is_empty() {
                debug!(count = cues.len(), "View not mounted, cues dropped");
            }
            return;
        }
        for cue in cues {
            if let Err(e) = self.audio.play(cue) {
                warn!(cue = %cue, error = %e, "Failed to play cue");
            }
        }
    }
}
