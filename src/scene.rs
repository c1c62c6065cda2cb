//! Application context for a fire effect.
//!
//! [`FireScene`] gathers the per-frame state a host needs: the frame clock,
//! the emitter and camera positions, the viewport, and the particle system.
//! The host creates it once, calls [`tick`](FireScene::tick) every display
//! refresh, and forwards window resizes.
//!
//! ```ignore
//! let mut scene = FireScene::new(SceneConfig::default())?;
//! loop {
//!     scene.set_camera_position(orbit_camera.position());
//!     scene.tick();
//!     renderer.draw_sprites(scene.particles().vertex_bytes(), scene.particles().material());
//! }
//! ```

use crate::config::ParticleSystemConfig;
use crate::error::ConfigError;
use crate::lifecycle::Lifecycle;
use crate::system::ParticleSystem;
use crate::time::Time;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to build a [`FireScene`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub particles: ParticleSystemConfig,
    /// World position of the emitter.
    pub emitter_position: Vec3,
    /// World position of the camera.
    pub camera_position: Vec3,
    /// Viewport size in pixels.
    pub viewport: [f32; 2],
    /// Fixed simulation step per frame, or `None` for real frame timing.
    pub fixed_step: Option<f32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particles: ParticleSystemConfig::default(),
            emitter_position: Vec3::new(0.1, -2.2, -1.6),
            camera_position: Vec3::new(35.0, 8.0, 36.0),
            viewport: [1280.0, 720.0],
            fixed_step: Some(0.016),
        }
    }
}

impl SceneConfig {
    /// Load a JSON scene description and validate its particle settings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.particles.validate()?;
        Ok(config)
    }
}

/// A running fire effect and the frame state around it.
#[derive(Debug, Clone)]
pub struct FireScene {
    time: Time,
    system: ParticleSystem,
    emitter_position: Vec3,
    camera_position: Vec3,
    viewport: [f32; 2],
}

impl FireScene {
    /// Build the scene with the flame lifecycle.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        Self::with_lifecycle(config, Lifecycle::fire())
    }

    /// Build the scene with custom attribute curves.
    pub fn with_lifecycle(config: SceneConfig, lifecycle: Lifecycle) -> Result<Self, ConfigError> {
        let [width, height] = config.viewport;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::invalid(
                "viewport",
                format!("must be positive, got {}x{}", width, height),
            ));
        }
        let mut system = ParticleSystem::new(config.particles)?
            .with_lifecycle(lifecycle)
            .with_emitter_position(config.emitter_position)
            .with_viewpoint(config.camera_position);
        system.resize(height);

        let time = match config.fixed_step {
            Some(step) => Time::fixed(step),
            None => Time::new(),
        };

        log::debug!(
            "fire scene ready: emitter={} camera={} viewport={}x{}",
            config.emitter_position,
            config.camera_position,
            width,
            height
        );

        Ok(Self {
            time,
            system,
            emitter_position: config.emitter_position,
            camera_position: config.camera_position,
            viewport: config.viewport,
        })
    }

    /// Reseed the particle system for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.system = self.system.with_seed(seed);
        self
    }

    /// Advance one frame. Returns the simulated step in seconds.
    pub fn tick(&mut self) -> f32 {
        let dt = self.time.tick();
        self.system.set_emitter_position(self.emitter_position);
        self.system.set_viewpoint(self.camera_position);
        self.system.update(dt);
        dt
    }

    /// Forward a window resize. Only the height affects sprite scale.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = [width, height];
        self.system.resize(height);
    }

    /// Forward a change of the camera's vertical field of view.
    pub fn set_fov_y(&mut self, degrees: f32) {
        self.system.set_fov_y(degrees);
    }

    pub fn set_emitter_position(&mut self, position: Vec3) {
        self.emitter_position = position;
    }

    pub fn set_camera_position(&mut self, position: Vec3) {
        self.camera_position = position;
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn time_mut(&mut self) -> &mut Time {
        &mut self.time
    }

    pub fn viewport(&self) -> [f32; 2] {
        self.viewport
    }

    /// Viewport width over height.
    pub fn aspect(&self) -> f32 {
        self.viewport[0] / self.viewport[1]
    }
}
