//! Capabilities the state machine drives but does not own

/// Identifies one started run of a tick source
pub type ScheduleId = u64;

/// Periodic 1 Hz tick producer.
///
/// At most one schedule is live per instance: `start` replaces any running
/// schedule, and `stop` is idempotent.
pub trait TickSource {
    /// Start a fresh schedule, stopping the previous one first
    fn start(&mut self) -> ScheduleId;

    fn stop(&mut self);

    /// Id of the live schedule, if any
    fn active_schedule(&self) -> Option<ScheduleId>;

    /// Whether a tick stamped with `schedule` belongs to the live schedule
    fn accepts(&self, schedule: ScheduleId) -> bool {
        self.active_schedule() == Some(schedule)
    }
}

/// Completion alarm.
///
/// `notify_start` plays looped from the beginning; `notify_stop` pauses and
/// rewinds. Errors are reported but never fatal.
pub trait SoundNotifier {
    fn notify_start(&mut self) -> Result<(), String>;

    fn notify_stop(&mut self);
}

/// Sound notifier that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSound;

impl SoundNotifier for NullSound {
    fn notify_start(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn notify_stop(&mut self) {}
}

impl<T: TickSource + ?Sized> TickSource for Box<T> {
    fn start(&mut self) -> ScheduleId {
        (**self).start()
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn active_schedule(&self) -> Option<ScheduleId> {
        (**self).active_schedule()
    }
}

impl<S: SoundNotifier + ?Sized> SoundNotifier for Box<S> {
    fn notify_start(&mut self) -> Result<(), String> {
        (**self).notify_start()
    }

    fn notify_stop(&mut self) {
        (**self).notify_stop()
    }
}
