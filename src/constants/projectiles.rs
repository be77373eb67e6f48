//! Projectile tuning constants.

/// Collider radius for the wolf's ranged attack
pub const ENEMY_PROJECTILE_RADIUS: f32 = 0.25;

/// Collider radius for player-fired projectiles
pub const PLAYER_PROJECTILE_RADIUS: f32 = 0.25;

/// Speed of player-fired projectiles in world units per second
pub const PLAYER_PROJECTILE_SPEED: f32 = 12.0;
