//! Timer API module
//!
//! This module contains the handle used to drive a running timer and the
//! presentation structures built from its snapshots.

pub mod handle;
pub mod responses;

pub use handle::TimerHandle;
pub use responses::{format_time, TimerView};
