//! Timer background task
//!
//! The task owns the state machine and is the only place it is mutated.
//! User commands and ticks arrive through one queue and are applied one at a
//! time; every applied transition is published as a fresh snapshot before
//! the caller is answered.

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use crate::state::{
    Mode, ScheduleId, SoundNotifier, TickSource, TimerSnapshot, TimerStateMachine, Transition,
};

/// Answer sent back to the caller of a user command
pub type Reply = oneshot::Sender<Transition>;

/// Input accepted by the timer task
#[derive(Debug)]
pub enum TimerCommand {
    SwitchMode(Mode, Reply),
    ToggleStart(Reply),
    Reset(Reply),
    /// One-second tick from the given schedule
    Tick(ScheduleId),
}

impl TimerCommand {
    /// Action name recorded in snapshots
    pub fn action(&self) -> &'static str {
        match self {
            TimerCommand::SwitchMode(..) => "switch-mode",
            TimerCommand::ToggleStart(_) => "toggle",
            TimerCommand::Reset(_) => "reset",
            TimerCommand::Tick(_) => "tick",
        }
    }
}

/// Apply commands until every sender is gone, then silence all side effects
pub async fn timer_task<T, S>(
    mut machine: TimerStateMachine<T, S>,
    mut commands: mpsc::Receiver<TimerCommand>,
    snapshots: watch::Sender<TimerSnapshot>,
) where
    T: TickSource,
    S: SoundNotifier,
{
    info!("Starting timer task");

    while let Some(command) = commands.recv().await {
        let action = command.action();
        let (transition, reply) = match command {
            TimerCommand::SwitchMode(mode, reply) => (machine.switch_mode(mode), Some(reply)),
            TimerCommand::ToggleStart(reply) => (machine.toggle_start(), Some(reply)),
            TimerCommand::Reset(reply) => (machine.reset(), Some(reply)),
            TimerCommand::Tick(schedule) => (machine.tick_from(schedule), None),
        };

        match transition {
            Transition::Applied => {
                let snapshot = TimerSnapshot::after(machine.snapshot(), action);
                debug!(
                    "Applied {}: {}s remaining, phase {:?}",
                    action, snapshot.state.remaining_seconds, snapshot.phase
                );
                if snapshots.send(snapshot).is_err() {
                    warn!("No snapshot subscribers left");
                }
            }
            Transition::Ignored(reason) => {
                debug!("Ignored {}: {:?}", action, reason);
            }
        }

        if let Some(reply) = reply {
            if reply.send(transition).is_err() {
                debug!("Caller stopped waiting for {}", action);
            }
        }
    }

    machine.shutdown();
    info!("Timer task stopped");
}
