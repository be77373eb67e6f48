//! Enemy wolf behavior.
//!
//! Each wolf runs a two-phase life: first it travels toward the anchor it
//! picked at spawn, then it settles there, tracks the player, and fires a
//! projectile whenever its attack timer lapses.
//!
//! Phase rules (the original's two variants disagreed, this is the one we
//! use): the run timer gates the travel phase, movement is clamped so the
//! wolf never overshoots, and the wolf counts as arrived as soon as it is
//! within `ANCHOR_EPSILON` of the anchor or the run timer expires. Once
//! arrived it never moves again.

use glam::Vec2;
use hecs::{Entity, World};

use crate::audio::SoundCue;
use crate::components::{Orientation, Player, Position, Wolf};
use crate::constants::ANCHOR_EPSILON;
use crate::events::{EventQueue, GameEvent};
use crate::math;
use crate::spawning;

/// Advance every wolf by one fixed step.
pub fn update_wolves(world: &mut World, dt: f32, events: &mut EventQueue) {
    puffin::profile_function!();

    // Live player position - facing is recomputed against it every frame
    let player_pos = world
        .query::<(&Position, &Player)>()
        .iter()
        .next()
        .map(|(_, (pos, _))| pos.to_vec2());

    let mut fire_requests: Vec<(Entity, Vec2, Orientation, f32)> = Vec::new();

    for (entity, (pos, orientation, wolf)) in
        world.query_mut::<(&mut Position, &mut Orientation, &mut Wolf)>()
    {
        wolf.run_timer -= dt;
        wolf.attack_timer -= dt;

        if wolf.run_timer > 0.0 && !wolf.at_anchor {
            let current = pos.to_vec2();
            if current.distance(wolf.anchor) > ANCHOR_EPSILON {
                // One-shot spawn howl on the first frame of actual travel
                if !wolf.spawn_sound_played {
                    events.push(GameEvent::SoundCue {
                        cue: SoundCue::WolfSpawn,
                    });
                    wolf.spawn_sound_played = true;
                }
                let next = math::move_towards(current, wolf.anchor, wolf.speed * dt);
                *pos = Position::from_vec2(next);
                if next.distance(wolf.anchor) <= ANCHOR_EPSILON {
                    wolf.at_anchor = true;
                }
            } else {
                wolf.at_anchor = true;
            }
        } else {
            // Timer expiry ends the travel phase wherever the wolf stands
            wolf.at_anchor = true;
        }

        if wolf.at_anchor {
            if let Some(target) = player_pos {
                orientation.angle = math::facing_angle(pos.to_vec2(), target);
            }
            if wolf.attack_timer < 0.0 {
                fire_requests.push((entity, pos.to_vec2(), *orientation, wolf.speed));
            }
        }
    }

    // Projectile spawns mutate the world, so they happen outside the query
    for (shooter, wolf_pos, wolf_orientation, wolf_speed) in fire_requests {
        let projectile =
            spawning::spawn_enemy_projectile(world, wolf_pos, wolf_orientation, wolf_speed);
        events.push(GameEvent::ProjectileFired { shooter, projectile });
        if let Ok(mut wolf) = world.get::<&mut Wolf>(shooter) {
            wolf.attack_timer = wolf.attack_cooldown;
        }
    }
}
