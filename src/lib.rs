//! Focus Timer - a pomodoro countdown timer
//!
//! This library provides the countdown state machine, the task that
//! serializes commands and ticks onto it, the completion sound, and a
//! terminal view driven by read-only snapshots.

pub mod api;
pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use api::{TimerHandle, TimerView};
pub use config::Config;
pub use state::{Mode, Phase, TimerSnapshot, TimerState, TimerStateMachine};
pub use utils::signals::shutdown_signal;
