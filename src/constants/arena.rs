//! Arena layout constants.

/// Half-extent of the playable arena on the x axis
pub const ARENA_HALF_WIDTH: f32 = 10.0;
/// Half-extent of the playable arena on the y axis
pub const ARENA_HALF_HEIGHT: f32 = 10.0;

/// Margin beyond the arena bounds before projectiles are despawned
pub const OUT_OF_BOUNDS_MARGIN: f32 = 2.0;

/// Default anchor positions the wolf may settle at (the four map corners)
pub const DEFAULT_ANCHORS: [(f32, f32); 4] = [(-5.0, 5.0), (5.0, 5.0), (-5.0, -5.0), (5.0, -5.0)];

/// Player start position (center of the map)
pub const PLAYER_START: (f32, f32) = (0.0, 0.0);

/// Player collider radius
pub const PLAYER_RADIUS: f32 = 0.5;
