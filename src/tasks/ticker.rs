//! Interval-driven tick source

use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

use crate::state::{ScheduleId, TickSource};
use super::TimerCommand;

/// Period between two ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The single live schedule of a ticker
#[derive(Debug)]
struct ActiveSchedule {
    id: ScheduleId,
    handle: JoinHandle<()>,
}

/// Tick source that posts `TimerCommand::Tick` into the timer task's queue.
///
/// Holds only a weak sender, so a running schedule never keeps the command
/// channel open on its own.
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    commands: mpsc::WeakSender<TimerCommand>,
    next_id: ScheduleId,
    schedule: Option<ActiveSchedule>,
}

impl IntervalTicker {
    pub fn new(commands: &mpsc::Sender<TimerCommand>) -> Self {
        Self::with_period(commands, TICK_PERIOD)
    }

    pub fn with_period(commands: &mpsc::Sender<TimerCommand>, period: Duration) -> Self {
        Self {
            period,
            commands: commands.downgrade(),
            next_id: 0,
            schedule: None,
        }
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self) -> ScheduleId {
        self.stop();

        self.next_id += 1;
        let id = self.next_id;
        let period = self.period;
        let commands = self.commands.clone();

        let handle = tokio::spawn(async move {
            // First tick lands one full period after start
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let Some(tx) = commands.upgrade() else {
                    debug!("Command channel closed, ending schedule {}", id);
                    break;
                };
                if tx.send(TimerCommand::Tick(id)).await.is_err() {
                    debug!("Timer task gone, ending schedule {}", id);
                    break;
                }
            }
        });

        debug!("Started tick schedule {}", id);
        self.schedule = Some(ActiveSchedule { id, handle });
        id
    }

    fn stop(&mut self) {
        if let Some(schedule) = self.schedule.take() {
            schedule.handle.abort();
            debug!("Stopped tick schedule {}", schedule.id);
        }
    }

    fn active_schedule(&self) -> Option<ScheduleId> {
        self.schedule.as_ref().map(|s| s.id)
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
