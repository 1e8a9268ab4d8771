//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the icon crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frames between 1% battery drain steps (~0.5 s at 50 FPS).
pub const BATTERY_DRAIN_FRAMES: u32 = 25;
