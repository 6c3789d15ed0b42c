//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which is not available in `no_std`
//! environments, so they live here rather than in the common crate.

use std::time::Duration;

/// Target frame time. One frame per 30 ms matches the dominant instrument
/// tick period, so most instruments receive exactly one tick per frame.
pub const FRAME_TIME: Duration = Duration::from_millis(30);
