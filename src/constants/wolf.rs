//! Enemy wolf tuning constants.

/// Wolf movement speed in world units per second
pub const WOLF_SPEED: f32 = 8.0;

/// Wolf spawn position (bottom of the map)
pub const WOLF_SPAWN: (f32, f32) = (0.0, -8.0);

/// Seconds the wolf spends running toward its chosen anchor
pub const WOLF_RUN_TO_ANCHOR_SECS: f32 = 3.0;

/// Seconds between wolf ranged attacks once it has settled
pub const WOLF_ATTACK_COOLDOWN_SECS: f32 = 7.0;

/// Wolf collider radius (body contact with the player ends the game)
pub const WOLF_RADIUS: f32 = 0.6;

/// Distance from the wolf's center to its muzzle, along the facing axis.
/// Projectiles spawn here so they don't immediately overlap the wolf.
pub const WOLF_MUZZLE_OFFSET: f32 = 0.8;

/// Positional tolerance for "the wolf has reached its anchor"
pub const ANCHOR_EPSILON: f32 = 1e-3;

/// Sprite art points up, so facing angles are offset by -90 degrees
pub const SPRITE_ANGLE_OFFSET: f32 = -std::f32::consts::FRAC_PI_2;

/// Number of wolves spawned into the arena
pub const WOLF_COUNT: usize = 1;
