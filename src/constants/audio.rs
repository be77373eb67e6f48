//! Audio cue constants.
//!
//! Cues are synthesized tones rather than sampled assets, so each one is
//! fully described by a frequency and a duration.

/// Wolf spawn howl frequency (Hz)
pub const CUE_WOLF_SPAWN_FREQ: f32 = 220.0;
/// Wolf spawn howl duration (seconds)
pub const CUE_WOLF_SPAWN_SECS: f32 = 0.5;

/// Wolf death yelp frequency (Hz)
pub const CUE_WOLF_DEATH_FREQ: f32 = 660.0;
/// Wolf death yelp duration (seconds)
pub const CUE_WOLF_DEATH_SECS: f32 = 0.35;

/// Playback volume for synthesized cues
pub const CUE_VOLUME: f32 = 0.2;
