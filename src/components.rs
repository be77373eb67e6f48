use glam::Vec2;

/// Position component - continuous world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Orientation component - rotation about the z axis, in radians.
///
/// Sprites point "up" at angle zero, so the facing axis is the rotated
/// up-vector, not the rotated x-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub angle: f32,
}

impl Orientation {
    pub fn new(angle: f32) -> Self {
        Self { angle }
    }

    /// Unit vector along the facing axis (the sprite's up-vector).
    pub fn forward(&self) -> Vec2 {
        Vec2::new(-self.angle.sin(), self.angle.cos())
    }
}

/// Velocity component - world units per second
#[derive(Debug, Clone, Copy)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Circular collider for contact classification
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub radius: f32,
}

impl Collider {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Enemy wolf state.
///
/// The anchor is chosen once at spawn and never changes. Both timers count
/// down every frame; the run timer gates the travel phase and the attack
/// timer gates projectile emission.
#[derive(Debug, Clone)]
pub struct Wolf {
    /// Anchor position the wolf runs to, fixed for its lifetime
    pub anchor: Vec2,
    /// Movement speed, also scales the emitted projectile's velocity
    pub speed: f32,
    /// Countdown for the travel phase
    pub run_timer: f32,
    /// Countdown until the next ranged attack
    pub attack_timer: f32,
    /// Value the attack timer resets to after each emission
    pub attack_cooldown: f32,
    /// Set once the spawn cue has been requested
    pub spawn_sound_played: bool,
    /// Set once the wolf has settled at its anchor
    pub at_anchor: bool,
}

impl Wolf {
    pub fn new(anchor: Vec2, speed: f32, run_timer: f32, attack_cooldown: f32) -> Self {
        Self {
            anchor,
            speed,
            run_timer,
            // Starts at zero so the first shot comes immediately on arrival
            attack_timer: 0.0,
            attack_cooldown,
            spawn_sound_played: false,
            at_anchor: false,
        }
    }
}

/// Marker for projectiles fired by the enemy wolf.
/// Contact with the player routes to the lose path.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProjectile;

/// Marker for projectiles fired by the player.
/// Contact with a wolf destroys the wolf.
#[derive(Debug, Clone, Copy)]
pub struct PlayerProjectile;
