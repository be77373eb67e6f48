//! Arena configuration loaded from JSON.
//!
//! Every tunable has a compiled-in default from `constants`, so the binary
//! runs without a config file. A malformed or invalid file is a fatal setup
//! error, not a recoverable condition.

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::constants::*;

/// Arena and wolf tuning, deserialized from a JSON file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Candidate anchor positions; each wolf picks one at random
    pub anchors: Vec<(f32, f32)>,
    /// Wolf spawn position
    pub wolf_spawn: (f32, f32),
    /// Wolf movement speed (also scales its projectile velocity)
    pub wolf_speed: f32,
    /// Seconds the wolf spends running to its anchor
    pub run_to_anchor_secs: f32,
    /// Seconds between wolf ranged attacks
    pub attack_cooldown_secs: f32,
    /// Number of wolves to spawn
    pub wolf_count: usize,
    /// Player start position
    pub player_start: (f32, f32),
    /// Playable half-extents; projectiles despawn beyond these plus a margin
    pub arena_half_extents: (f32, f32),
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            anchors: DEFAULT_ANCHORS.to_vec(),
            wolf_spawn: WOLF_SPAWN,
            wolf_speed: WOLF_SPEED,
            run_to_anchor_secs: WOLF_RUN_TO_ANCHOR_SECS,
            attack_cooldown_secs: WOLF_ATTACK_COOLDOWN_SECS,
            wolf_count: WOLF_COUNT,
            player_start: PLAYER_START,
            arena_half_extents: (ARENA_HALF_WIDTH, ARENA_HALF_HEIGHT),
        }
    }
}

impl ArenaConfig {
    /// Load a config from a JSON file and validate it.
    pub fn load(path: &Path) -> Result<Self, String> {
        let json_str = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config: ArenaConfig = serde_json::from_str(&json_str)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the wolf cannot function with.
    pub fn validate(&self) -> Result<(), String> {
        if self.anchors.is_empty() {
            return Err("Config must supply at least one anchor position".to_string());
        }
        if self.wolf_speed <= 0.0 {
            return Err(format!("Wolf speed must be positive, got {}", self.wolf_speed));
        }
        if self.run_to_anchor_secs <= 0.0 {
            return Err(format!(
                "Run-to-anchor time must be positive, got {}",
                self.run_to_anchor_secs
            ));
        }
        if self.attack_cooldown_secs <= 0.0 {
            return Err(format!(
                "Attack cooldown must be positive, got {}",
                self.attack_cooldown_secs
            ));
        }
        Ok(())
    }

    /// Anchor candidates as vectors.
    pub fn anchor_vecs(&self) -> Vec<Vec2> {
        self.anchors.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ArenaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.anchors.len(), 4);
        assert_eq!(config.wolf_spawn, (0.0, -8.0));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: ArenaConfig = serde_json::from_str(r#"{"wolf_speed": 4.5}"#).unwrap();
        assert_eq!(config.wolf_speed, 4.5);
        assert_eq!(config.attack_cooldown_secs, WOLF_ATTACK_COOLDOWN_SECS);
        assert_eq!(config.anchors.len(), 4);
    }

    #[test]
    fn test_empty_anchor_set_is_rejected() {
        let config: ArenaConfig = serde_json::from_str(r#"{"anchors": []}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_speed_is_rejected() {
        let config: ArenaConfig = serde_json::from_str(r#"{"wolf_speed": 0.0}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
