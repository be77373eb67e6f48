//! Fixed-step simulation loop.
//!
//! `advance_frame` is the single entry point the binary (and tests) drive:
//! it runs the systems in order, drains the event queue, and reports the
//! round outcome plus any sound cues requested this frame.

use glam::Vec2;
use hecs::World;

use crate::audio::SoundCue;
use crate::events::{EventQueue, GameEvent};
use crate::game::{self, Outcome};
use crate::systems;

/// What one fixed step produced
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub outcome: Outcome,
    /// Sound cues requested this frame, in emission order
    pub cues: Vec<SoundCue>,
}

/// Advance the simulation by one fixed step.
pub fn advance_frame(
    world: &mut World,
    dt: f32,
    events: &mut EventQueue,
    arena_half_extents: Vec2,
) -> FrameResult {
    puffin::profile_function!();

    systems::wolf::update_wolves(world, dt, events);
    systems::projectile::update_projectiles(world, dt);
    systems::collision::detect_contacts(world, events);
    systems::projectile::cleanup_out_of_bounds(world, arena_half_extents);

    let mut outcome = Outcome::Playing;
    let mut cues = Vec::new();
    for event in events.drain() {
        match event {
            GameEvent::SoundCue { cue } => cues.push(cue),
            GameEvent::PlayerCaught | GameEvent::PlayerShot => outcome = Outcome::Lost,
            GameEvent::ProjectileFired { .. } | GameEvent::WolfKilled { .. } => {}
        }
    }

    // Arena cleared - but a loss this same frame takes precedence
    if outcome == Outcome::Playing && game::living_wolves(world) == 0 {
        outcome = Outcome::Won;
    }

    FrameResult { outcome, cues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Position;
    use crate::config::ArenaConfig;
    use crate::constants::FIXED_STEP_SECS;
    use crate::game::init_world;
    use crate::spawning::spawn_player_projectile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn half_extents(config: &ArenaConfig) -> Vec2 {
        Vec2::new(config.arena_half_extents.0, config.arena_half_extents.1)
    }

    #[test]
    fn test_round_is_lost_when_the_wolf_catches_the_player() {
        let mut config = ArenaConfig::default();
        // Anchor on top of the player start so the wolf runs straight in
        config.anchors = vec![(0.0, 0.0)];
        let mut rng = StdRng::seed_from_u64(3);
        let (mut world, _player) = init_world(&config, &mut rng).unwrap();
        let mut events = EventQueue::new();

        let mut outcome = Outcome::Playing;
        for _ in 0..300 {
            let result = advance_frame(&mut world, FIXED_STEP_SECS, &mut events, half_extents(&config));
            if result.outcome != Outcome::Playing {
                outcome = result.outcome;
                break;
            }
        }
        assert_eq!(outcome, Outcome::Lost);
    }

    #[test]
    fn test_round_is_won_when_the_last_wolf_dies() {
        let config = ArenaConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let (mut world, _player) = init_world(&config, &mut rng).unwrap();
        let mut events = EventQueue::new();

        // Find the wolf and drop a player projectile onto it
        let wolf_pos = world
            .query::<(&Position, &crate::components::Wolf)>()
            .iter()
            .next()
            .map(|(_, (pos, _))| pos.to_vec2())
            .unwrap();
        spawn_player_projectile(&mut world, wolf_pos, Vec2::X);

        let result = advance_frame(&mut world, FIXED_STEP_SECS, &mut events, half_extents(&config));
        assert_eq!(result.outcome, Outcome::Won);
        assert!(result.cues.contains(&SoundCue::WolfDeath));
    }

    #[test]
    fn test_spawn_cue_surfaces_through_the_frame_result() {
        let config = ArenaConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let (mut world, _player) = init_world(&config, &mut rng).unwrap();
        let mut events = EventQueue::new();

        let first = advance_frame(&mut world, FIXED_STEP_SECS, &mut events, half_extents(&config));
        assert_eq!(first.cues, vec![SoundCue::WolfSpawn]);

        // Never again for the rest of the run
        for _ in 0..240 {
            let result = advance_frame(&mut world, FIXED_STEP_SECS, &mut events, half_extents(&config));
            assert!(!result.cues.contains(&SoundCue::WolfSpawn));
        }
    }
}
