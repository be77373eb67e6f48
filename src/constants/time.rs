//! Simulation timing constants.

/// Fixed simulation step, in seconds (60 Hz)
pub const FIXED_STEP_SECS: f32 = 1.0 / 60.0;

/// Safety cap on simulated frames for the headless binary
pub const MAX_SIM_FRAMES: u64 = 60 * 60 * 10;
