//! External service module
//!
//! This module contains the platform-facing capabilities used by the timer,
//! currently the completion sound.

pub mod sound;

// Re-export main types
pub use sound::{check_player_available, CommandSound};
