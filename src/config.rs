//! Particle system configuration.
//!
//! [`ParticleSystemConfig`] carries every tunable of the simulator. It can be
//! built in code with the `with_*` methods or loaded from JSON; missing JSON
//! fields fall back to the flame defaults.
//!
//! ```json
//! {
//!   "rate": 200.0,
//!   "radius": 0.5,
//!   "max_life": 1.5,
//!   "max_size": 3.0,
//!   "drag": 0.1,
//!   "texture": "fire.png"
//! }
//! ```

use crate::emitter::SpawnBox;
use crate::error::ConfigError;
use crate::visuals::{BlendMode, TextureHandle, DEFAULT_FOV_Y_DEGREES};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for a [`ParticleSystem`](crate::ParticleSystem).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleSystemConfig {
    /// Particles spawned per second.
    pub rate: f32,
    /// Scale applied to the unit spawn box.
    pub radius: f32,
    /// Longest possible particle life, in seconds. Each particle lives
    /// between 25% and 100% of this.
    pub max_life: f32,
    /// Largest possible base size. Each particle gets 50% to 100% of this.
    pub max_size: f32,
    /// Fraction of velocity removed per second.
    pub drag: f32,
    /// Velocity of every particle at spawn.
    pub initial_velocity: Vec3,
    /// Per-update rotation rates are drawn from `-rotation_rate..rotation_rate`.
    pub rotation_rate: f32,
    /// Unit-space spawn offsets around the emitter.
    pub spawn_box: SpawnBox,
    /// Sprite texture passed through to the renderer.
    pub texture: TextureHandle,
    /// Sprite blending.
    pub blend_mode: BlendMode,
    /// Camera vertical field of view used for sprite scaling, in degrees.
    pub fov_y_degrees: f32,
}

impl Default for ParticleSystemConfig {
    fn default() -> Self {
        Self {
            rate: 200.0,
            radius: 0.5,
            max_life: 1.5,
            max_size: 3.0,
            drag: 0.1,
            initial_velocity: Vec3::new(0.0, 1.5, 0.0),
            rotation_rate: 0.005,
            spawn_box: SpawnBox::FLAME,
            texture: TextureHandle::default(),
            blend_mode: BlendMode::Additive,
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
        }
    }
}

impl ParticleSystemConfig {
    /// Flame defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_max_life(mut self, seconds: f32) -> Self {
        self.max_life = seconds;
        self
    }

    pub fn with_max_size(mut self, size: f32) -> Self {
        self.max_size = size;
        self
    }

    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_initial_velocity(mut self, velocity: Vec3) -> Self {
        self.initial_velocity = velocity;
        self
    }

    pub fn with_rotation_rate(mut self, rate: f32) -> Self {
        self.rotation_rate = rate;
        self
    }

    pub fn with_spawn_box(mut self, spawn_box: SpawnBox) -> Self {
        self.spawn_box = spawn_box;
        self
    }

    pub fn with_texture(mut self, texture: impl Into<TextureHandle>) -> Self {
        self.texture = texture.into();
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    pub fn with_fov_y(mut self, degrees: f32) -> Self {
        self.fov_y_degrees = degrees;
        self
    }

    /// Check that the simulator can run with these values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rate.is_finite() && self.rate > 0.0) {
            return Err(ConfigError::invalid(
                "rate",
                format!("must be a positive number, got {}", self.rate),
            ));
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(ConfigError::invalid(
                "radius",
                format!("must not be negative, got {}", self.radius),
            ));
        }
        if !(self.max_life.is_finite() && self.max_life > 0.0) {
            return Err(ConfigError::invalid(
                "max_life",
                format!("must be positive, got {}", self.max_life),
            ));
        }
        if !(self.max_size.is_finite() && self.max_size > 0.0) {
            return Err(ConfigError::invalid(
                "max_size",
                format!("must be positive, got {}", self.max_size),
            ));
        }
        if !(self.drag.is_finite() && self.drag >= 0.0) {
            return Err(ConfigError::invalid(
                "drag",
                format!("must not be negative, got {}", self.drag),
            ));
        }
        if !self.initial_velocity.is_finite() {
            return Err(ConfigError::invalid("initial_velocity", "must be finite"));
        }
        if !(self.rotation_rate.is_finite() && self.rotation_rate >= 0.0) {
            return Err(ConfigError::invalid(
                "rotation_rate",
                format!("must not be negative, got {}", self.rotation_rate),
            ));
        }
        if !self.spawn_box.is_valid() {
            return Err(ConfigError::invalid("spawn_box", "min must not exceed max on any axis"));
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigError::invalid(
                "fov_y_degrees",
                format!("must be between 0 and 180, got {}", self.fov_y_degrees),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Save as a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
