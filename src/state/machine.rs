//! Countdown state machine
//!
//! Every command performs its state update and then explicitly drives the
//! tick source and sound notifier for the new state.

use tracing::{debug, info, warn};

use super::{Mode, Phase, ScheduleId, SoundNotifier, TickSource, TimerState};

/// Why a command left the state untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Mode switch or reset while a completion awaits dismissal
    Completed,
    /// Tick delivered while the countdown is not running
    NotRunning,
    /// Tick produced by a schedule that has since been stopped or replaced
    StaleSchedule,
}

/// Result of feeding a command or tick to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Owns the timer state together with its tick source and sound notifier
#[derive(Debug)]
pub struct TimerStateMachine<T, S> {
    state: TimerState,
    ticker: T,
    sound: S,
}

impl<T: TickSource, S: SoundNotifier> TimerStateMachine<T, S> {
    pub fn new(ticker: T, sound: S) -> Self {
        Self {
            state: TimerState::new(),
            ticker,
            sound,
        }
    }

    /// Copy of the current state for rendering
    pub fn snapshot(&self) -> TimerState {
        self.state.clone()
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn tick_source(&self) -> &T {
        &self.ticker
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    /// Select a preset and load its full countdown. Ignored while completed.
    pub fn switch_mode(&mut self, mode: Mode) -> Transition {
        if self.state.is_completed {
            debug!("Ignoring switch to {} while completed", mode);
            return Transition::Ignored(IgnoreReason::Completed);
        }

        info!("Switching mode: {} -> {}", self.state.mode, mode);
        self.state = TimerState::idle(mode, self.state.completed_work_sessions);
        self.ticker.stop();
        Transition::Applied
    }

    /// Start, pause, or dismiss a completion.
    ///
    /// Dismissing reloads the current mode's full countdown; it does not
    /// advance to another mode.
    pub fn toggle_start(&mut self) -> Transition {
        match self.state.phase() {
            Phase::Completed => {
                info!("Dismissing completed {} countdown", self.state.mode);
                self.state = TimerState::idle(self.state.mode, self.state.completed_work_sessions);
                self.ticker.stop();
                self.sound.notify_stop();
            }
            Phase::Running => {
                info!("Pausing at {}s remaining", self.state.remaining_seconds);
                self.state.is_running = false;
                self.ticker.stop();
            }
            Phase::Idle => {
                self.state.is_running = true;
                let schedule = self.ticker.start();
                info!(
                    "Starting {} countdown at {}s remaining (schedule {})",
                    self.state.mode, self.state.remaining_seconds, schedule
                );
            }
        }
        Transition::Applied
    }

    /// Reload the current mode's full countdown. Ignored while completed.
    pub fn reset(&mut self) -> Transition {
        if self.state.is_completed {
            debug!("Ignoring reset while completed");
            return Transition::Ignored(IgnoreReason::Completed);
        }

        info!("Resetting {} countdown", self.state.mode);
        self.state = TimerState::idle(self.state.mode, self.state.completed_work_sessions);
        self.ticker.stop();
        Transition::Applied
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> Transition {
        if !self.state.is_running {
            debug!("Dropping tick while not running");
            return Transition::Ignored(IgnoreReason::NotRunning);
        }

        if self.state.remaining_seconds <= 1 {
            self.complete();
        } else {
            self.state.remaining_seconds -= 1;
        }
        Transition::Applied
    }

    /// Advance the countdown for a tick stamped with its producing schedule.
    /// Ticks from a stopped or replaced schedule are dropped.
    pub fn tick_from(&mut self, schedule: ScheduleId) -> Transition {
        if !self.ticker.accepts(schedule) {
            debug!("Dropping tick from stale schedule {}", schedule);
            return Transition::Ignored(IgnoreReason::StaleSchedule);
        }
        self.tick()
    }

    /// Stop every side effect. Used when the owner goes away.
    pub fn shutdown(&mut self) {
        self.ticker.stop();
        if self.state.is_completed {
            self.sound.notify_stop();
        }
    }

    fn complete(&mut self) {
        self.state.remaining_seconds = 0;
        self.state.is_running = false;
        self.state.is_completed = true;
        if self.state.mode == Mode::Work {
            self.state.completed_work_sessions += 1;
        }
        self.ticker.stop();

        info!(
            "{} countdown completed ({} work sessions)",
            self.state.mode, self.state.completed_work_sessions
        );

        if let Err(e) = self.sound.notify_start() {
            warn!("Completion sound blocked: {}", e);
        }
    }
}
