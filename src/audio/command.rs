//! Cue playback through an external player process.

use super::assets::CueAssets;
use super::error::AudioError;
use super::AudioCue;
use crate::games::tictactoe::Cue;
use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, info, instrument, warn};

/// Placeholder replaced with the asset path in player arguments.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Plays each cue by spawning a player command such as `ffplay` or `afplay`.
///
/// Playback is fire-and-forget. Playing a cue that is still sounding kills
/// the earlier process first, so the cue restarts from the beginning.
/// Every process still running is killed when the player is dropped.
///
/// Must be used from within a Tokio runtime.
pub struct CommandAudio {
    assets: CueAssets,
    program: String,
    args: Vec<String>,
    in_flight: HashMap<Cue, Child>,
}

impl CommandAudio {
    /// Creates a player from a command line (program followed by arguments).
    #[instrument(skip(assets), fields(asset_dir = %assets.dir().display()))]
    pub fn new(assets: CueAssets, command: &[String]) -> Result<Self, AudioError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| AudioError::new("Audio player command is empty"))?;

        info!(program = %program, "Audio player configured");
        Ok(Self {
            assets,
            program: program.clone(),
            args: args.to_vec(),
            in_flight: HashMap::new(),
        })
    }

    /// Number of player processes currently tracked.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Arguments passed to the player for `path`.
    ///
    /// Every `{file}` placeholder is substituted; without one, the path is
    /// appended as the last argument.
    pub fn player_args(&self, path: &Path) -> Vec<String> {
        let file = path.display().to_string();
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(FILE_PLACEHOLDER, &file))
            .collect();
        if !self.args.iter().any(|arg| arg.contains(FILE_PLACEHOLDER)) {
            args.push(file);
        }
        args
    }

    /// Drops handles of players that already finished.
    fn reap(&mut self) {
        self.in_flight
            .retain(|_, child| matches!(child.try_wait(), Ok(None)));
    }
}

impl AudioCue for CommandAudio {
    #[instrument(skip(self, cue), fields(cue = %cue))]
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.reap();

        if let Some(mut previous) = self.in_flight.remove(&cue) {
            debug!("Restarting cue that is still playing");
            if let Err(e) = previous.start_kill() {
                debug!(error = %e, "Previous player already exited");
            }
        }

        let path = self.assets.path_for(cue);
        if !path.exists() {
            return Err(AudioError::new(format!(
                "Missing asset for cue {}: {}",
                cue,
                path.display()
            )));
        }

        let child = Command::new(&self.program)
            .args(self.player_args(&path))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AudioError::new(format!("Failed to spawn {}: {}", self.program, e)))?;

        debug!(pid = ?child.id(), path = %path.display(), "Cue started");
        self.in_flight.insert(cue, child);
        Ok(())
    }
}

impl Drop for CommandAudio {
    fn drop(&mut self) {
        if self.in_flight.is_empty() {
            return;
        }
        debug!(count = self.in_flight.len(), "Stopping audio players");
        for (cue, mut child) in self.in_flight.drain() {
            if let Err(e) = child.start_kill() {
                warn!(cue = %cue, error = %e, "Failed to stop audio player");
            }
        }
    }
}
