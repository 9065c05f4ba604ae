//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

use crate::view::OutputFormat;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "focus-timer")]
#[command(about = "A pomodoro countdown timer for the terminal")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Disable the completion sound
    #[arg(long)]
    pub no_sound: bool,

    /// Sound file looped when a countdown completes
    #[arg(long, default_value = "/usr/share/sounds/freedesktop/stereo/complete.oga")]
    pub sound_file: PathBuf,

    /// Audio player command used to play the sound file
    #[arg(long, default_value = "paplay")]
    pub player: String,

    /// Render snapshots as JSON lines instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json { OutputFormat::Json } else { OutputFormat::Text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["focus-timer"]).unwrap();
        assert!(!config.no_sound);
        assert_eq!(config.player, "paplay");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn flags() {
        let config = Config::try_parse_from([
            "focus-timer", "-v", "--json", "--no-sound", "--player", "aplay",
            "--sound-file", "/tmp/bell.wav",
        ])
        .unwrap();
        assert!(config.no_sound);
        assert_eq!(config.player, "aplay");
        assert_eq!(config.sound_file, PathBuf::from("/tmp/bell.wav"));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.output_format(), OutputFormat::Json);
    }
}
