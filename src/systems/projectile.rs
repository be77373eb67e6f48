//! Projectile movement and cleanup.
//!
//! Projectiles fly in a straight line at a fixed velocity. Once one leaves
//! the arena (plus a margin) it is despawned; hits are handled by the
//! collision system, not here.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Position, Velocity};
use crate::constants::OUT_OF_BOUNDS_MARGIN;

/// Integrate projectile positions over one fixed step.
pub fn update_projectiles(world: &mut World, dt: f32) {
    puffin::profile_function!();

    for (_, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}

/// Collect projectiles that have left the arena, then despawn them.
pub fn cleanup_out_of_bounds(world: &mut World, half_extents: Vec2) {
    puffin::profile_function!();

    let limit = half_extents + Vec2::splat(OUT_OF_BOUNDS_MARGIN);
    let to_despawn: Vec<Entity> = world
        .query::<(&Position, &Velocity)>()
        .iter()
        .filter(|(_, (pos, _))| pos.x.abs() > limit.x || pos.y.abs() > limit.y)
        .map(|(entity, _)| entity)
        .collect();

    for entity in to_despawn {
        let _ = world.despawn(entity);
    }
}
