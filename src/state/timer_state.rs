//! Timer state structure and derived values

use serde::{Deserialize, Serialize};

use super::Mode;

/// Coarse phase of the countdown, derived from the running/completed flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not running, not completed. Remaining may be full or partial.
    Idle,
    Running,
    /// Remaining hit zero; waiting for dismissal.
    Completed,
}

/// Countdown state owned by the state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: Mode,
    pub remaining_seconds: u64,
    pub is_running: bool,
    pub is_completed: bool,
    pub completed_work_sessions: u32,
}

impl TimerState {
    /// Create the startup state: an idle, full work countdown
    pub fn new() -> Self {
        Self::idle(Mode::default(), 0)
    }

    /// Create an idle state with a full countdown for `mode`
    pub fn idle(mode: Mode, completed_work_sessions: u32) -> Self {
        Self {
            mode,
            remaining_seconds: mode.duration_seconds(),
            is_running: false,
            is_completed: false,
            completed_work_sessions,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_completed {
            Phase::Completed
        } else if self.is_running {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    pub fn duration_seconds(&self) -> u64 {
        self.mode.duration_seconds()
    }

    /// Fraction of the countdown already elapsed, in [0, 1]
    pub fn progress(&self) -> f64 {
        let duration = self.duration_seconds();
        let elapsed = duration.saturating_sub(self.remaining_seconds);
        elapsed as f64 / duration as f64
    }

    /// Check the structural invariants of the state
    pub fn is_consistent(&self) -> bool {
        !(self.is_running && self.is_completed)
            && self.remaining_seconds <= self.duration_seconds()
            && (!self.is_completed || self.remaining_seconds == 0)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_on_full_work_countdown() {
        let state = TimerState::new();
        assert_eq!(state.mode, Mode::Work);
        assert_eq!(state.remaining_seconds, 1500);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.completed_work_sessions, 0);
        assert!(state.is_consistent());
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let mut state = TimerState::idle(Mode::LongBreak, 0);
        assert_eq!(state.progress(), 0.0);

        state.remaining_seconds = 450;
        assert!((state.progress() - 0.5).abs() < f64::EPSILON);

        state.remaining_seconds = 0;
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn running_and_completed_together_is_inconsistent() {
        let mut state = TimerState::new();
        state.remaining_seconds = 0;
        state.is_running = true;
        state.is_completed = true;
        assert!(!state.is_consistent());
    }
}
