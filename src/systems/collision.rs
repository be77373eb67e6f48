//! Contact detection and classification.
//!
//! Circle-overlap tests replace the host physics callbacks of an engine.
//! Only three pairings mean anything; every other overlap is ignored:
//!
//! - player projectile vs wolf: death cue, `WolfKilled`, wolf despawned
//! - wolf body vs player: `PlayerCaught` (lose)
//! - wolf projectile vs player: `PlayerShot` (lose), projectile despawned

use hecs::{Entity, World};

use crate::audio::SoundCue;
use crate::components::{Collider, EnemyProjectile, Player, PlayerProjectile, Position, Wolf};
use crate::events::{EventQueue, GameEvent};

fn circles_overlap(a: (&Position, &Collider), b: (&Position, &Collider)) -> bool {
    let dx = a.0.x - b.0.x;
    let dy = a.0.y - b.0.y;
    let reach = a.1.radius + b.1.radius;
    dx * dx + dy * dy <= reach * reach
}

/// Run all contact checks for this frame and emit the resulting events.
pub fn detect_contacts(world: &mut World, events: &mut EventQueue) {
    puffin::profile_function!();

    let player: Option<(Entity, Position, Collider)> = world
        .query::<(&Position, &Collider, &Player)>()
        .iter()
        .next()
        .map(|(entity, (pos, col, _))| (entity, *pos, *col));

    let wolves: Vec<(Entity, Position, Collider)> = world
        .query::<(&Position, &Collider, &Wolf)>()
        .iter()
        .map(|(entity, (pos, col, _))| (entity, *pos, *col))
        .collect();

    // Player projectile vs wolf: the wolf dies, at most once even if several
    // projectiles overlap it on the same frame
    let mut dead_wolves: Vec<(Entity, Position)> = Vec::new();
    let mut spent_projectiles: Vec<Entity> = Vec::new();
    for (projectile, (pos, col, _)) in world
        .query::<(&Position, &Collider, &PlayerProjectile)>()
        .iter()
    {
        for (wolf, wolf_pos, wolf_col) in &wolves {
            if dead_wolves.iter().any(|(dead, _)| dead == wolf) {
                continue;
            }
            if circles_overlap((pos, col), (wolf_pos, wolf_col)) {
                dead_wolves.push((*wolf, *wolf_pos));
                spent_projectiles.push(projectile);
                break;
            }
        }
    }

    // Wolf body vs player: lose
    let mut player_caught = false;
    if let Some((_, player_pos, player_col)) = player {
        for (wolf, wolf_pos, wolf_col) in &wolves {
            if dead_wolves.iter().any(|(dead, _)| dead == wolf) {
                continue;
            }
            if circles_overlap((wolf_pos, wolf_col), (&player_pos, &player_col)) {
                player_caught = true;
                break;
            }
        }
    }

    // Wolf projectile vs player: lose
    let mut player_shot = false;
    let mut landed_projectiles: Vec<Entity> = Vec::new();
    if let Some((_, player_pos, player_col)) = player {
        for (projectile, (pos, col, _)) in world
            .query::<(&Position, &Collider, &EnemyProjectile)>()
            .iter()
        {
            if circles_overlap((pos, col), (&player_pos, &player_col)) {
                player_shot = true;
                landed_projectiles.push(projectile);
            }
        }
    }

    for (wolf, pos) in dead_wolves {
        events.push(GameEvent::SoundCue {
            cue: SoundCue::WolfDeath,
        });
        events.push(GameEvent::WolfKilled {
            entity: wolf,
            position: (pos.x, pos.y),
        });
        let _ = world.despawn(wolf);
    }
    for projectile in spent_projectiles.into_iter().chain(landed_projectiles) {
        let _ = world.despawn(projectile);
    }
    if player_caught {
        events.push(GameEvent::PlayerCaught);
    }
    if player_shot {
        events.push(GameEvent::PlayerShot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Velocity;
    use crate::spawning::{spawn_player, spawn_player_projectile, WolfDef};
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spawn_wolf_at(world: &mut World, pos: Vec2) -> Entity {
        let mut rng = StdRng::seed_from_u64(0);
        let def = WolfDef {
            spawn: pos,
            ..WolfDef::default()
        };
        def.spawn(world, &[pos], &mut rng)
    }

    fn drain(events: &mut EventQueue) -> Vec<GameEvent> {
        events.drain().collect()
    }

    #[test]
    fn test_player_projectile_kills_wolf_exactly_once() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        spawn_player(&mut world, Vec2::new(9.0, 9.0));
        let wolf = spawn_wolf_at(&mut world, Vec2::new(0.0, 0.0));
        spawn_player_projectile(&mut world, Vec2::new(0.1, 0.0), Vec2::X);
        // A second projectile overlapping the same wolf on the same frame
        spawn_player_projectile(&mut world, Vec2::new(-0.1, 0.0), Vec2::X);

        detect_contacts(&mut world, &mut events);

        assert!(!world.contains(wolf));
        let drained = drain(&mut events);
        let deaths = drained
            .iter()
            .filter(|e| matches!(e, GameEvent::WolfKilled { .. }))
            .count();
        let death_cues = drained
            .iter()
            .filter(|e| {
                matches!(e, GameEvent::SoundCue { cue } if *cue == SoundCue::WolfDeath)
            })
            .count();
        assert_eq!(deaths, 1);
        assert_eq!(death_cues, 1);

        // A later frame with the surviving projectile cannot re-kill
        detect_contacts(&mut world, &mut events);
        assert!(drain(&mut events)
            .iter()
            .all(|e| !matches!(e, GameEvent::WolfKilled { .. })));
    }

    #[test]
    fn test_wolf_body_contact_loses_never_wins() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        spawn_player(&mut world, Vec2::new(0.5, 0.0));
        spawn_wolf_at(&mut world, Vec2::new(0.0, 0.0));

        detect_contacts(&mut world, &mut events);

        let drained = drain(&mut events);
        let caught = drained
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerCaught))
            .count();
        assert_eq!(caught, 1);
        assert!(drained
            .iter()
            .all(|e| !matches!(e, GameEvent::WolfKilled { .. })));
    }

    #[test]
    fn test_enemy_projectile_hit_loses_and_is_consumed() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        spawn_player(&mut world, Vec2::new(0.0, 0.0));
        let projectile = world.spawn((
            Position::new(0.2, 0.0),
            crate::components::Orientation::new(0.0),
            Velocity::new(8.0, 0.0),
            Collider::new(0.25),
            EnemyProjectile,
        ));

        detect_contacts(&mut world, &mut events);

        assert!(!world.contains(projectile));
        let drained = drain(&mut events);
        assert!(drained.iter().any(|e| matches!(e, GameEvent::PlayerShot)));
    }

    #[test]
    fn test_unclassified_overlaps_are_ignored() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        spawn_player(&mut world, Vec2::new(9.0, 9.0));
        spawn_wolf_at(&mut world, Vec2::new(0.0, 0.0));
        // A wolf projectile sitting on the wolf classifies as nothing
        world.spawn((
            Position::new(0.1, 0.0),
            Velocity::new(0.0, 0.0),
            Collider::new(0.25),
            EnemyProjectile,
        ));

        detect_contacts(&mut world, &mut events);
        assert!(drain(&mut events).is_empty());
    }

    #[test]
    fn test_distant_entities_do_not_collide() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        spawn_player(&mut world, Vec2::new(9.0, 9.0));
        let wolf = spawn_wolf_at(&mut world, Vec2::new(-9.0, -9.0));
        spawn_player_projectile(&mut world, Vec2::new(5.0, 5.0), Vec2::X);

        detect_contacts(&mut world, &mut events);

        assert!(world.contains(wolf));
        assert!(drain(&mut events).is_empty());
    }
}
