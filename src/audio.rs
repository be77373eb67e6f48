//! Sound cue playback.
//!
//! Cues are synthesized tones played through rodio, so no sample assets are
//! needed. Systems never touch this module directly; they emit
//! `GameEvent::SoundCue` and the frame loop forwards drained cues here.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};

use crate::constants::{
    CUE_VOLUME, CUE_WOLF_DEATH_FREQ, CUE_WOLF_DEATH_SECS, CUE_WOLF_SPAWN_FREQ,
    CUE_WOLF_SPAWN_SECS,
};

/// Named sound cues the simulation can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    WolfSpawn,
    WolfDeath,
}

impl SoundCue {
    /// Tone frequency for this cue, in Hz
    pub fn frequency(self) -> f32 {
        match self {
            SoundCue::WolfSpawn => CUE_WOLF_SPAWN_FREQ,
            SoundCue::WolfDeath => CUE_WOLF_DEATH_FREQ,
        }
    }

    /// Tone duration for this cue
    pub fn duration(self) -> Duration {
        let secs = match self {
            SoundCue::WolfSpawn => CUE_WOLF_SPAWN_SECS,
            SoundCue::WolfDeath => CUE_WOLF_DEATH_SECS,
        };
        Duration::from_secs_f32(secs)
    }
}

/// Handle to the audio output device.
///
/// Playback is fire-and-forget; a cue that fails to queue is dropped
/// silently, matching the original's one-way sound calls.
pub struct AudioOutput {
    // Dropping the stream stops playback, so it must live as long as the game
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOutput {
    /// Open the default output device.
    pub fn new() -> Result<Self, String> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| format!("Failed to open audio output: {}", e))?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    /// Queue a cue for playback.
    pub fn play(&self, cue: SoundCue) {
        let source = SineWave::new(cue.frequency())
            .take_duration(cue.duration())
            .amplify(CUE_VOLUME);
        let _ = self.handle.play_raw(source.convert_samples());
    }
}
