//! Audio cue playback.
//!
//! The game emits [`Cue`]s; an [`AudioCue`] sink turns them into sound.
//! Sinks are collaborators of the shell, never of the game state itself.

mod assets;
mod command;
mod error;

pub use assets::{AssetStatus, CueAssets};
pub use command::{CommandAudio, FILE_PLACEHOLDER};
pub use error::AudioError;

use crate::games::tictactoe::Cue;
use tracing::{debug, instrument};

/// Something that can play a named cue.
///
/// Playing is fire-and-forget: implementations must not block until the
/// sound finishes. Playing a cue that is already sounding restarts it.
pub trait AudioCue {
    /// Starts playing `cue`.
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

impl<T: AudioCue + ?Sized> AudioCue for Box<T> {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        (**self).play(cue)
    }
}

/// Sink used when audio is disabled. Cues are only traced.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioCue for SilentAudio {
    #[instrument(skip(self, cue), fields(cue = %cue))]
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        debug!("Audio muted, cue skipped");
        Ok(())
    }
}

/// Sink that records every cue it is asked to play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingAudio {
    played: Vec<Cue>,
}

impl RecordingAudio {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far, oldest first.
    pub fn played(&self) -> &[Cue] {
        &self.played
    }

    /// Returns and forgets the recorded cues.
    pub fn take(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.played)
    }
}

impl AudioCue for RecordingAudio {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.played.push(cue);
        Ok(())
    }
}
