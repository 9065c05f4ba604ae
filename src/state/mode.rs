//! Timer modes and their fixed durations

use std::fmt;
use serde::{Deserialize, Serialize};

/// Work session length in minutes
pub const WORK_MINUTES: u64 = 25;
/// Work session length in seconds
pub const WORK_SECONDS: u64 = WORK_MINUTES * 60;
/// Short break length in seconds.
///
/// The selector advertises a 5 minute break but the configured value is one
/// second. Kept as configured.
pub const SHORT_BREAK_SECONDS: u64 = 1;
/// Long break length in seconds (15 minutes)
pub const LONG_BREAK_SECONDS: u64 = 15 * 60;

/// One of the three timer presets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Work, Mode::ShortBreak, Mode::LongBreak];

    /// Full countdown length for this mode in seconds
    pub fn duration_seconds(self) -> u64 {
        match self {
            Mode::Work => WORK_SECONDS,
            Mode::ShortBreak => SHORT_BREAK_SECONDS,
            Mode::LongBreak => LONG_BREAK_SECONDS,
        }
    }

    /// Label shown inside the timer circle
    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "FOCUS TIME",
            Mode::ShortBreak => "SHORT BREAK",
            Mode::LongBreak => "LONG BREAK",
        }
    }

    /// Name shown on the mode selector
    pub fn selector_name(self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Work => "work",
            Mode::ShortBreak => "short_break",
            Mode::LongBreak => "long_break",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
