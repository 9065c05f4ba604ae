//! Cloneable handle onto a running timer task

use std::time::Duration;
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};
use tracing::info;

use crate::{
    state::{Mode, SoundNotifier, TimerSnapshot, TimerStateMachine, Transition},
    tasks::{timer_task, IntervalTicker, Reply, TimerCommand, TICK_PERIOD},
};

/// Commands queued ahead of the timer task
const COMMAND_QUEUE_CAPACITY: usize = 64;

/// Public boundary of the timer.
///
/// Commands are applied in order by the timer task and resolve once applied
/// (or ignored), so a snapshot read afterwards already reflects them.
/// Snapshots are read from a watch channel and never block the task. The task exits once every
/// handle has been dropped.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    commands: mpsc::Sender<TimerCommand>,
    snapshots: watch::Receiver<TimerSnapshot>,
}

impl TimerHandle {
    /// Spawn a timer task ticking once per second
    pub fn spawn<S>(sound: S) -> (Self, JoinHandle<()>)
    where
        S: SoundNotifier + Send + 'static,
    {
        Self::spawn_with_period(sound, TICK_PERIOD)
    }

    pub fn spawn_with_period<S>(sound: S, period: Duration) -> (Self, JoinHandle<()>)
    where
        S: SoundNotifier + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::default());

        let ticker = IntervalTicker::with_period(&command_tx, period);
        let machine = TimerStateMachine::new(ticker, sound);
        let task = tokio::spawn(timer_task(machine, command_rx, snapshot_tx));

        info!("Timer spawned with {}ms tick period", period.as_millis());
        let handle = Self {
            commands: command_tx,
            snapshots: snapshot_rx,
        };
        (handle, task)
    }

    /// Select a preset. Ignored while a completion awaits dismissal.
    pub async fn switch_mode(&self, mode: Mode) -> Result<Transition, String> {
        self.request(|reply| TimerCommand::SwitchMode(mode, reply)).await
    }

    /// Start, pause, or dismiss a completion
    pub async fn toggle_start(&self) -> Result<Transition, String> {
        self.request(TimerCommand::ToggleStart).await
    }

    /// Reload the full countdown. Ignored while a completion awaits dismissal.
    pub async fn reset(&self) -> Result<Transition, String> {
        self.request(TimerCommand::Reset).await
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> TimerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every applied transition
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshots.clone()
    }

    async fn request<F>(&self, command: F) -> Result<Transition, String>
    where
        F: FnOnce(Reply) -> TimerCommand,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(command(reply_tx))
            .await
            .map_err(|e| format!("Timer task is not running: {}", e))?;

        reply_rx
            .await
            .map_err(|e| format!("Timer task stopped before answering: {}", e))
    }
}
