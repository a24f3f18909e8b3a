use serde::{Deserialize, Serialize};

use froghop_core::error::ConfigError;

/// Gravity added to the player's vertical velocity each tick (pixels/tick²,
/// downward — y grows down).
pub const GRAVITY: f32 = 1.0;
/// Horizontal speed while a move key is held (pixels/tick).
pub const MOVE_SPEED: f32 = 10.0;
/// Upward velocity applied on jump (pixels/tick).
pub const JUMP_IMPULSE: f32 = 30.0;
/// Source sprite frame size (square, pixels).
pub const BASE_SPRITE_PX: f32 = 32.0;
/// Display scaling applied to the base sprite size.
pub const SPRITE_SCALE: f32 = 2.0;
/// Ticks between animation frame advances.
pub const FRAMES_PER_ADVANCE: u32 = 3;

/// Physics tunables, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_impulse: f32,
    pub base_sprite_px: f32,
    pub sprite_scale: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_impulse: JUMP_IMPULSE,
            base_sprite_px: BASE_SPRITE_PX,
            sprite_scale: SPRITE_SCALE,
        }
    }
}

/// Animation tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub frames_per_advance: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames_per_advance: FRAMES_PER_ADVANCE,
        }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub animation: AnimationConfig,
}

impl GameConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("FROGHOP_CONFIG")
            .unwrap_or_else(|_| "config/froghop.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<GameConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    GameConfig::default()
                },
            },
            Err(_) => GameConfig::default(),
        }
    }

    /// Reject configurations that would make the simulation degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("physics.gravity", self.physics.gravity),
            ("physics.move_speed", self.physics.move_speed),
            ("physics.jump_impulse", self.physics.jump_impulse),
            ("physics.base_sprite_px", self.physics.base_sprite_px),
            ("physics.sprite_scale", self.physics.sprite_scale),
        ];
        for (field, value) in positives {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.animation.frames_per_advance == 0 {
            return Err(ConfigError::NonPositive {
                field: "animation.frames_per_advance",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Displayed player size in pixels (square).
    pub fn player_size(&self) -> f32 {
        self.physics.base_sprite_px * self.physics.sprite_scale
    }
}
