//! Read-only snapshot published to views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Phase, TimerState};

/// Timer state plus derived values, as seen by a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    #[serde(flatten)]
    pub state: TimerState,
    pub phase: Phase,
    pub duration_seconds: u64,
    pub progress: f64,
    /// Name of the last applied action ("tick", "reset", ...)
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

impl TimerSnapshot {
    pub fn new(state: TimerState) -> Self {
        Self {
            phase: state.phase(),
            duration_seconds: state.duration_seconds(),
            progress: state.progress(),
            state,
            last_action: None,
            last_action_time: None,
        }
    }

    /// Snapshot stamped with the action that produced it
    pub fn after(state: TimerState, action: &str) -> Self {
        Self {
            last_action: Some(action.to_string()),
            last_action_time: Some(Utc::now()),
            ..Self::new(state)
        }
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::new(TimerState::new())
    }
}
