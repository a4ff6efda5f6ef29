//! Audible tic-tac-toe - a two-player terminal game with sound cues.
//!
//! # Architecture
//!
//! - **Games**: the select/confirm state machine and pure win/draw rules
//! - **Audio**: cue sinks that turn game events into sound
//! - **TUI**: ratatui rendering, keyboard and mouse input, the event loop
//! - **Config**: TOML configuration for audio and logging
//!
//! # Example
//!
//! ```
//! use audible_tictactoe::{Cue, GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 3, 1, 4] {
//!     game.select_cell(cell);
//!     game.confirm_selection();
//! }
//! game.select_cell(2);
//! let cues = game.confirm_selection();
//!
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(cues, vec![Cue::Success, Cue::Winner(Player::X)]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod audio;
mod config;
mod games;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    invariants, rules, Board, Cue, GameState, GameStatus, Phase, Player, Position, Square,
};

// Crate-level exports - Audio
pub use audio::{
    AssetStatus, AudioCue, AudioError, CommandAudio, CueAssets, RecordingAudio, SilentAudio,
    FILE_PLACEHOLDER,
};

// Crate-level exports - Configuration
pub use config::{AppConfig, AudioConfig, ConfigError, LoggingConfig, DEFAULT_CONFIG_FILE};

// Crate-level exports - Terminal UI
pub use tui::{
    action_for_key, action_for_mouse, build_audio, draw, init_file_logging, run_tui, ui, Action,
    App, BoardLayout, Hit, InputSubscription, TerminalGuard,
};
