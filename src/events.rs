//! Game event system for decoupled communication between systems.
//!
//! Systems emit events, the frame loop consumes them. Sound playback and
//! end-of-game notification react through this seam without systems holding
//! references to audio or menu state.

use hecs::Entity;

use crate::audio::SoundCue;

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A named sound cue should be played this frame
    SoundCue { cue: SoundCue },
    /// A wolf emitted a projectile
    ProjectileFired {
        shooter: Entity,
        projectile: Entity,
    },
    /// A wolf was destroyed by a player projectile
    WolfKilled {
        entity: Entity,
        position: (f32, f32),
    },
    /// The player ran into a wolf's body (lose)
    PlayerCaught,
    /// The player was hit by a wolf projectile (lose)
    PlayerShot,
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
