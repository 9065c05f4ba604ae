//! Presentation structures derived from timer snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Mode, Phase, TimerSnapshot, WORK_MINUTES};

/// Everything a renderer needs to draw the timer screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerView {
    pub mode: Mode,
    pub phase: Phase,
    /// Remaining time as `MM:SS`
    pub display: String,
    pub label: String,
    pub progress_percent: f64,
    /// Caption of the start/pause/dismiss button
    pub primary_action: String,
    pub mode_selector_enabled: bool,
    pub reset_enabled: bool,
    pub completed: bool,
    pub completed_sessions: u32,
    pub focused_minutes: u64,
    pub timestamp: DateTime<Utc>,
}

impl TimerView {
    pub fn from_snapshot(snapshot: &TimerSnapshot) -> Self {
        let state = &snapshot.state;
        let completed = snapshot.phase == Phase::Completed;

        Self {
            mode: state.mode,
            phase: snapshot.phase,
            display: format_time(state.remaining_seconds),
            label: state.mode.label().to_string(),
            progress_percent: snapshot.progress * 100.0,
            primary_action: primary_action(snapshot.phase).to_string(),
            mode_selector_enabled: !completed,
            reset_enabled: !completed,
            completed,
            completed_sessions: state.completed_work_sessions,
            focused_minutes: u64::from(state.completed_work_sessions) * WORK_MINUTES,
            timestamp: snapshot.last_action_time.unwrap_or_else(Utc::now),
        }
    }
}

fn primary_action(phase: Phase) -> &'static str {
    match phase {
        Phase::Completed => "DISMISS",
        Phase::Running => "PAUSE",
        Phase::Idle => "START",
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerState;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(100 * 60 + 5), "100:05");
    }

    #[test]
    fn idle_view_offers_start() {
        let view = TimerView::from_snapshot(&TimerSnapshot::default());
        assert_eq!(view.display, "25:00");
        assert_eq!(view.label, "FOCUS TIME");
        assert_eq!(view.primary_action, "START");
        assert_eq!(view.progress_percent, 0.0);
        assert!(view.mode_selector_enabled);
        assert!(view.reset_enabled);
        assert!(!view.completed);
    }

    #[test]
    fn running_view_offers_pause() {
        let mut state = TimerState::idle(Mode::LongBreak, 0);
        state.is_running = true;
        state.remaining_seconds = 450;

        let view = TimerView::from_snapshot(&TimerSnapshot::new(state));
        assert_eq!(view.primary_action, "PAUSE");
        assert_eq!(view.label, "LONG BREAK");
        assert_eq!(view.display, "07:30");
        assert!((view.progress_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn completed_view_disables_controls_and_counts_minutes() {
        let mut state = TimerState::idle(Mode::Work, 3);
        state.remaining_seconds = 0;
        state.is_completed = true;

        let view = TimerView::from_snapshot(&TimerSnapshot::new(state));
        assert_eq!(view.primary_action, "DISMISS");
        assert!(view.completed);
        assert!(!view.mode_selector_enabled);
        assert!(!view.reset_enabled);
        assert_eq!(view.completed_sessions, 3);
        assert_eq!(view.focused_minutes, 75);
        assert_eq!(view.progress_percent, 100.0);
    }

    #[test]
    fn view_serializes_for_json_rendering() {
        let view = TimerView::from_snapshot(&TimerSnapshot::default());
        let json: serde_json::Value = serde_json::to_value(&view).unwrap();
        assert_eq!(json["mode"], "work");
        assert_eq!(json["phase"], "idle");
        assert_eq!(json["display"], "25:00");
    }
}
