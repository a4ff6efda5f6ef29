//! Terminal game view.

mod app;
mod input;
pub mod ui;

pub use app::App;
pub use input::{action_for_key, action_for_mouse, Action, InputSubscription};
pub use ui::{draw, BoardLayout, Hit};

use crate::audio::{AudioCue, CommandAudio, SilentAudio};
use crate::config::{AppConfig, AudioConfig, LoggingConfig};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Runs the game view until the user quits.
///
/// Must be called within a Tokio runtime.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    init_file_logging(config.logging())?;

    info!("Starting tic-tac-toe");

    let audio = build_audio(config.audio());
    let mut app = App::new(audio);

    let mut guard = TerminalGuard::enter()?;
    let mut input = InputSubscription::subscribe();

    let res = run_app(guard.terminal_mut(), &mut app, &mut input).await;

    drop(input);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Tic-tac-toe closed");
    res
}

/// Draw, wait for one event, apply it, repeat.
#[instrument(skip_all)]
async fn run_app<A: AudioCue>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<A>,
    input: &mut InputSubscription,
) -> Result<()> {
    loop {
        let mut layout = BoardLayout::default();
        terminal.draw(|f| layout = draw(f, app.game()))?;
        app.mount(layout);

        let Some(event) = input.next().await else {
            warn!("Input stream closed");
            return Ok(());
        };
        app.handle_event(event);

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Picks the audio sink for the configuration.
///
/// Falls back to silence when audio is disabled or the player is unusable.
#[instrument(skip(config))]
pub fn build_audio(config: &AudioConfig) -> Box<dyn AudioCue> {
    if !*config.enabled() {
        info!("Audio disabled");
        return Box::new(SilentAudio);
    }
    match CommandAudio::new(config.assets(), config.player_command()) {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!(error = %e, "Audio player unavailable, continuing without sound");
            Box::new(SilentAudio)
        }
    }
}

/// Sets up logging to a file so log lines do not corrupt the screen.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_file_logging(config: &LoggingConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.file())
        .with_context(|| format!("Failed to create log file {}", config.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Raw mode, alternate screen and mouse capture for the life of the view.
///
/// Dropping the guard restores the terminal, also on error paths.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Takes over the terminal.
    #[instrument]
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        };
        match setup() {
            Ok(terminal) => {
                debug!("Terminal prepared");
                Ok(Self { terminal })
            }
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                let _ = disable_raw_mode();
                Err(e.into())
            }
        }
    }

    /// The managed terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ) {
            warn!(error = %e, "Failed to restore screen");
        }
        let _ = self.terminal.show_cursor();
        debug!("Terminal restored");
    }
}
