//! Background tasks module
//!
//! This module contains the timer task and the tick source that feeds it.

pub mod ticker;
pub mod timer_task;

// Re-export main types
pub use ticker::{IntervalTicker, TICK_PERIOD};
pub use timer_task::{timer_task, Reply, TimerCommand};
