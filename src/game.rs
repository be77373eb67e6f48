//! World initialization and game outcome.

use hecs::{Entity, World};
use rand::Rng;

use crate::components::Wolf;
use crate::config::ArenaConfig;
use crate::spawning::{self, WolfDef};

/// Terminal state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Round still running
    Playing,
    /// The player was caught or shot
    Lost,
    /// Every wolf has been destroyed
    Won,
}

/// Initialize the game world with the player and the configured wolves.
/// Returns the world and the player entity.
pub fn init_world(config: &ArenaConfig, rng: &mut impl Rng) -> Result<(World, Entity), String> {
    config.validate()?;

    let mut world = World::new();
    let player = spawning::spawn_player(
        &mut world,
        glam::Vec2::new(config.player_start.0, config.player_start.1),
    );

    let def = WolfDef {
        spawn: glam::Vec2::new(config.wolf_spawn.0, config.wolf_spawn.1),
        speed: config.wolf_speed,
        run_to_anchor_secs: config.run_to_anchor_secs,
        attack_cooldown_secs: config.attack_cooldown_secs,
    };
    let anchors = config.anchor_vecs();
    for _ in 0..config.wolf_count {
        def.spawn(&mut world, &anchors, rng);
    }

    Ok((world, player))
}

/// Count the wolves still alive.
pub fn living_wolves(world: &World) -> usize {
    world.query::<&Wolf>().iter().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Player;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_init_world_spawns_player_and_wolves() {
        let config = ArenaConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let (world, player) = init_world(&config, &mut rng).unwrap();

        assert!(world.get::<&Player>(player).is_ok());
        assert_eq!(living_wolves(&world), config.wolf_count);
    }

    #[test]
    fn test_init_world_rejects_invalid_config() {
        let mut config = ArenaConfig::default();
        config.anchors.clear();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(init_world(&config, &mut rng).is_err());
    }
}
