//! State management module
//!
//! This module contains the timer state, its state machine, and the
//! capabilities the state machine drives.

pub mod capabilities;
pub mod machine;
pub mod mode;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use capabilities::{NullSound, ScheduleId, SoundNotifier, TickSource};
pub use machine::{IgnoreReason, TimerStateMachine, Transition};
pub use mode::{Mode, LONG_BREAK_SECONDS, SHORT_BREAK_SECONDS, WORK_MINUTES, WORK_SECONDS};
pub use snapshot::TimerSnapshot;
pub use timer_state::{Phase, TimerState};
