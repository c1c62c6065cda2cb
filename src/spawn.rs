//! Randomized particle initialization.
//!
//! A [`Spawner`] turns the configured limits into fresh particles: a random
//! offset inside the spawn box, a random share of the maximum life and size,
//! a random starting angle, and a small random spin.

use crate::config::ParticleSystemConfig;
use crate::emitter::SpawnBox;
use crate::particle::Particle;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Shortest life, as a fraction of the configured maximum.
const MIN_LIFE_FRACTION: f32 = 0.25;
/// Smallest base size, as a fraction of the configured maximum.
const MIN_SIZE_FRACTION: f32 = 0.5;

/// Creates particles from the spawn limits of a configuration.
#[derive(Debug, Clone)]
pub struct Spawner {
    spawn_box: SpawnBox,
    radius: f32,
    max_life: f32,
    max_size: f32,
    rotation_rate: f32,
    initial_velocity: Vec3,
    rng: SmallRng,
}

impl Spawner {
    /// Spawner seeded from the system clock.
    pub fn new(config: &ParticleSystemConfig) -> Self {
        // Different each program execution
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::with_seed(config, seed)
    }

    /// Spawner with a fixed seed, for reproducible runs.
    pub fn with_seed(config: &ParticleSystemConfig, seed: u64) -> Self {
        Self {
            spawn_box: config.spawn_box,
            radius: config.radius,
            max_life: config.max_life,
            max_size: config.max_size,
            rotation_rate: config.rotation_rate,
            initial_velocity: config.initial_velocity,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 in `[min, max)`, or `min` when the range is empty.
    #[inline]
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.rng.gen::<f32>() * (max - min)
    }

    /// Create one particle around `origin`.
    ///
    /// Derived attributes (`current_size`, `color`, `alpha`) are zeroed until
    /// the first update pass fills them in.
    pub fn spawn(&mut self, origin: Vec3) -> Particle {
        let offset = self.spawn_box.sample(&mut self.rng, self.radius);
        let life = self.random_range(MIN_LIFE_FRACTION, 1.0) * self.max_life;
        let size = self.random_range(MIN_SIZE_FRACTION, 1.0) * self.max_size;
        let rotation = self.random_range(0.0, TAU);
        let rotation_rate = self.random_range(-self.rotation_rate, self.rotation_rate);

        Particle {
            position: origin + offset,
            velocity: self.initial_velocity,
            size,
            current_size: 0.0,
            color: Vec3::ZERO,
            alpha: 0.0,
            life,
            max_life: life,
            rotation,
            rotation_rate,
        }
    }
}
