//! Data-driven entity spawning.
//!
//! Defines the wolf's tuning bundle and the spawn functions for every entity
//! kind in the arena, keeping entity composition out of the systems.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use crate::components::{
    Collider, EnemyProjectile, Orientation, Player, PlayerProjectile, Position, Velocity, Wolf,
};
use crate::constants::*;
use crate::math;

/// Definition of a wolf - all the data needed to spawn one
#[derive(Debug, Clone)]
pub struct WolfDef {
    /// Spawn position (bottom of the map)
    pub spawn: Vec2,
    /// Movement speed, also scales projectile velocity
    pub speed: f32,
    /// Seconds spent running to the chosen anchor
    pub run_to_anchor_secs: f32,
    /// Seconds between ranged attacks
    pub attack_cooldown_secs: f32,
}

impl Default for WolfDef {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(WOLF_SPAWN.0, WOLF_SPAWN.1),
            speed: WOLF_SPEED,
            run_to_anchor_secs: WOLF_RUN_TO_ANCHOR_SECS,
            attack_cooldown_secs: WOLF_ATTACK_COOLDOWN_SECS,
        }
    }
}

impl WolfDef {
    /// Spawn a wolf at its fixed start position.
    ///
    /// One anchor is chosen uniformly at random from `anchors` and stays
    /// fixed for the wolf's lifetime. The wolf starts out facing it.
    ///
    /// # Panics
    /// Panics if `anchors` is empty. Configs are validated up front, so an
    /// empty set here is a setup defect, not a runtime condition.
    pub fn spawn(&self, world: &mut World, anchors: &[Vec2], rng: &mut impl Rng) -> Entity {
        assert!(!anchors.is_empty(), "wolf needs at least one anchor");
        let anchor = anchors[rng.gen_range(0..anchors.len())];
        world.spawn((
            Position::from_vec2(self.spawn),
            Orientation::new(math::facing_angle(self.spawn, anchor)),
            Wolf::new(anchor, self.speed, self.run_to_anchor_secs, self.attack_cooldown_secs),
            Collider::new(WOLF_RADIUS),
        ))
    }
}

/// Spawn the player at the given position.
pub fn spawn_player(world: &mut World, position: Vec2) -> Entity {
    world.spawn((
        Position::from_vec2(position),
        Orientation::new(0.0),
        Player,
        Collider::new(PLAYER_RADIUS),
    ))
}

/// Spawn a wolf projectile at the wolf's muzzle.
///
/// Orientation is copied from the wolf and the initial velocity is the
/// wolf's forward axis scaled by its speed.
pub fn spawn_enemy_projectile(
    world: &mut World,
    wolf_pos: Vec2,
    wolf_orientation: Orientation,
    wolf_speed: f32,
) -> Entity {
    let forward = wolf_orientation.forward();
    let muzzle = wolf_pos + forward * WOLF_MUZZLE_OFFSET;
    world.spawn((
        Position::from_vec2(muzzle),
        wolf_orientation,
        Velocity::from_vec2(forward * wolf_speed),
        Collider::new(ENEMY_PROJECTILE_RADIUS),
        EnemyProjectile,
    ))
}

/// Spawn a player projectile travelling in the given direction.
pub fn spawn_player_projectile(world: &mut World, position: Vec2, direction: Vec2) -> Entity {
    let dir = direction.normalize_or_zero();
    world.spawn((
        Position::from_vec2(position),
        Orientation::new(math::facing_angle(position, position + dir)),
        Velocity::from_vec2(dir * PLAYER_PROJECTILE_SPEED),
        Collider::new(PLAYER_PROJECTILE_RADIUS),
        PlayerProjectile,
    ))
}
