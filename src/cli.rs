//! Command-line interface for audible_tictactoe.

use audible_tictactoe::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;

/// Audible tic-tac-toe - two players, one keyboard, sound cues
#[derive(Parser, Debug)]
#[command(name = "audible_tictactoe")]
#[command(about = "Two-player tic-tac-toe with keyboard, mouse and audio cues", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory holding the audio assets (overrides the config file)
    #[arg(long, global = true)]
    pub asset_dir: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Disable audio cues
        #[arg(long)]
        mute: bool,
    },

    /// List every audio cue and the asset it plays
    Cues,
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { mute: false })
    }

    /// Loads the config file and applies command-line overrides.
    #[instrument(skip(self), fields(config = %self.config.display()))]
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::load_or_default(&self.config)?;
        if let Some(dir) = &self.asset_dir {
            config = config.with_asset_dir(dir);
        }
        if let Command::Play { mute: true } = self.command() {
            config = config.muted();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["audible_tictactoe"]).unwrap();
        assert_eq!(cli.command(), Command::Play { mute: false });
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_mute_and_asset_dir_override_config() {
        let cli = Cli::try_parse_from([
            "audible_tictactoe",
            "--config",
            "does-not-exist.toml",
            "play",
            "--mute",
            "--asset-dir",
            "sounds",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert!(!*config.audio().enabled());
        assert_eq!(config.audio().asset_dir(), &PathBuf::from("sounds"));
    }

    #[test]
    fn test_cues_subcommand() {
        let cli = Cli::try_parse_from(["audible_tictactoe", "cues"]).unwrap();
        assert_eq!(cli.command(), Command::Cues);
    }
}
