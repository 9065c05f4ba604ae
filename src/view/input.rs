//! Line-based input commands

use std::str::FromStr;

use crate::state::Mode;

/// A control the user activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    SwitchMode(Mode),
    /// Start, pause, or dismiss
    Toggle,
    Reset,
    Quit,
}

impl FromStr for InputCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let command = match line.trim().to_lowercase().as_str() {
            "" | "t" | "toggle" | "start" | "pause" | "dismiss" => InputCommand::Toggle,
            "w" | "work" => InputCommand::SwitchMode(Mode::Work),
            "s" | "short" => InputCommand::SwitchMode(Mode::ShortBreak),
            "l" | "long" => InputCommand::SwitchMode(Mode::LongBreak),
            "r" | "reset" => InputCommand::Reset,
            "q" | "quit" | "exit" => InputCommand::Quit,
            other => return Err(format!("Unknown command: {}", other)),
        };
        Ok(command)
    }
}

/// One-line summary of the accepted input
pub const HELP: &str =
    "[enter] start/pause/dismiss  [w] work  [s] short break  [l] long break  [r] reset  [q] quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_toggles() {
        assert_eq!("".parse::<InputCommand>(), Ok(InputCommand::Toggle));
        assert_eq!("  \n".parse::<InputCommand>(), Ok(InputCommand::Toggle));
        assert_eq!("DISMISS".parse::<InputCommand>(), Ok(InputCommand::Toggle));
    }

    #[test]
    fn mode_shortcuts() {
        assert_eq!("w".parse::<InputCommand>(), Ok(InputCommand::SwitchMode(Mode::Work)));
        assert_eq!("short".parse::<InputCommand>(), Ok(InputCommand::SwitchMode(Mode::ShortBreak)));
        assert_eq!("L".parse::<InputCommand>(), Ok(InputCommand::SwitchMode(Mode::LongBreak)));
    }

    #[test]
    fn reset_and_quit() {
        assert_eq!("r".parse::<InputCommand>(), Ok(InputCommand::Reset));
        assert_eq!("quit".parse::<InputCommand>(), Ok(InputCommand::Quit));
    }

    #[test]
    fn unknown_input_is_rejected() {
        let err = "snooze".parse::<InputCommand>().unwrap_err();
        assert!(err.contains("snooze"));
    }
}
