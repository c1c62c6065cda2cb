//! The particle simulator.
//!
//! [`ParticleSystem::update`] is called once per rendered frame with the frame's
//! elapsed time. Each call runs the same pipeline:
//!
//! 1. **Spawn** - emit `rate * dt` particles, carrying the fractional remainder
//!    to the next frame so the long-run rate never drifts.
//! 2. **Age & cull** - subtract `dt` from every particle's life and drop the
//!    ones that reach zero.
//! 3. **Derive & integrate** - sample the lifecycle curves, spin, move, and
//!    apply drag.
//! 4. **Depth sort** - farthest from the viewpoint first, for back-to-front
//!    blending.
//! 5. **Buffer** - rebuild the [`SpriteVertex`] buffer in draw order.
//!
//! # Example
//!
//! ```ignore
//! let mut fire = ParticleSystem::new(ParticleSystemConfig::default())?
//!     .with_lifecycle(Lifecycle::fire())
//!     .with_emitter_position(Vec3::new(0.1, -2.2, -1.6));
//!
//! // Every frame:
//! fire.set_viewpoint(camera_position);
//! fire.update(1.0 / 60.0);
//! queue.write_buffer(&buffer, 0, fire.vertex_bytes());
//! ```

use crate::config::ParticleSystemConfig;
use crate::error::{ConfigError, SimulationError};
use crate::lifecycle::Lifecycle;
use crate::particle::{apply_drag, Particle};
use crate::spawn::Spawner;
use crate::vertex::SpriteVertex;
use crate::visuals::SpriteMaterial;
use glam::Vec3;

/// CPU particle simulator producing a point-sprite vertex buffer.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    config: ParticleSystemConfig,
    lifecycle: Lifecycle,
    spawner: Spawner,
    material: SpriteMaterial,
    particles: Vec<Particle>,
    vertices: Vec<SpriteVertex>,
    /// Particles owed but not yet spawned; always in `[0, 1)` after a spawn pass.
    pending: f32,
    emitter_position: Vec3,
    viewpoint: Vec3,
    spawned_total: u64,
}

impl ParticleSystem {
    /// Create an empty system after validating `config`.
    ///
    /// The lifecycle starts as [`Lifecycle::fire`]; the emitter and the
    /// viewpoint both start at the origin.
    pub fn new(config: ParticleSystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let spawner = Spawner::new(&config);
        let mut material =
            SpriteMaterial::new(config.texture.clone()).with_fov_y(config.fov_y_degrees);
        material.blend_mode = config.blend_mode;
        log::debug!(
            "particle system created: rate={}/s max_life={}s max_size={} drag={}",
            config.rate,
            config.max_life,
            config.max_size,
            config.drag
        );

        Ok(Self {
            config,
            lifecycle: Lifecycle::fire(),
            spawner,
            material,
            particles: Vec::new(),
            vertices: Vec::new(),
            pending: 0.0,
            emitter_position: Vec3::ZERO,
            viewpoint: Vec3::ZERO,
            spawned_total: 0,
        })
    }

    /// Reseed the random source for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.spawner = Spawner::with_seed(&self.config, seed);
        self
    }

    /// Use different attribute curves.
    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    pub fn with_emitter_position(mut self, position: Vec3) -> Self {
        self.emitter_position = position;
        self
    }

    pub fn with_viewpoint(mut self, position: Vec3) -> Self {
        self.viewpoint = position;
        self
    }

    // =========================================================================
    // FRAME INPUTS
    // =========================================================================

    /// Move the emitter. New particles spawn around this point.
    pub fn set_emitter_position(&mut self, position: Vec3) {
        self.emitter_position = position;
    }

    /// Move the viewpoint used for depth sorting.
    pub fn set_viewpoint(&mut self, position: Vec3) {
        self.viewpoint = position;
    }

    /// Update the viewport height used for sprite scaling.
    pub fn resize(&mut self, viewport_height: f32) {
        self.material.resize(viewport_height);
    }

    /// Update the camera's vertical field of view used for sprite scaling.
    pub fn set_fov_y(&mut self, degrees: f32) {
        self.material.set_fov_y(degrees);
        log::debug!(
            "particle system fov set: fov_y={} point_multiplier={:.3}",
            degrees,
            self.material.point_multiplier()
        );
    }

    // =========================================================================
    // SIMULATION
    // =========================================================================

    /// Advance the simulation by `elapsed` seconds and rebuild the vertex buffer.
    ///
    /// `elapsed` must be non-negative. Use [`try_update`](Self::try_update) to
    /// have that checked.
    pub fn update(&mut self, elapsed: f32) {
        let spawned = self.add_particles(elapsed);
        let expired = self.update_particles(elapsed);
        self.rebuild_vertices();

        log::trace!(
            "particle update: dt={:.4} spawned={} expired={} live={} pending={:.3}",
            elapsed,
            spawned,
            expired,
            self.particles.len(),
            self.pending
        );
    }

    /// Like [`update`](Self::update), but rejects negative or non-finite time
    /// without touching any state.
    pub fn try_update(&mut self, elapsed: f32) -> Result<(), SimulationError> {
        if !elapsed.is_finite() {
            log::warn!("rejected non-finite elapsed time {}", elapsed);
            return Err(SimulationError::NonFiniteElapsed(elapsed));
        }
        if elapsed < 0.0 {
            log::warn!("rejected negative elapsed time {}", elapsed);
            return Err(SimulationError::NegativeElapsed(elapsed));
        }
        self.update(elapsed);
        Ok(())
    }

    /// Spawn the whole particles owed for `elapsed` seconds. Returns the count.
    fn add_particles(&mut self, elapsed: f32) -> usize {
        self.pending += elapsed * self.config.rate;
        let n = self.pending.floor().max(0.0);
        self.pending -= n;

        let n = n as usize;
        self.particles.reserve(n);
        for _ in 0..n {
            let particle = self.spawner.spawn(self.emitter_position);
            self.particles.push(particle);
        }
        self.spawned_total += n as u64;
        n
    }

    /// Age, cull, derive, integrate and sort. Returns the number culled.
    fn update_particles(&mut self, elapsed: f32) -> usize {
        for p in &mut self.particles {
            p.life -= elapsed;
        }

        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        let expired = before - self.particles.len();

        let drag = self.config.drag;
        for p in &mut self.particles {
            let sample = self.lifecycle.sample(p.life_fraction());
            p.rotation += p.rotation_rate;
            p.alpha = sample.alpha;
            p.current_size = p.size * sample.size_scale;
            p.color = sample.color;

            p.position += p.velocity * elapsed;
            p.velocity = apply_drag(p.velocity, elapsed, drag);
        }

        // Squared distance orders the same as distance.
        let viewpoint = self.viewpoint;
        self.particles.sort_unstable_by(|a, b| {
            let da = a.position.distance_squared(viewpoint);
            let db = b.position.distance_squared(viewpoint);
            db.total_cmp(&da)
        });

        expired
    }

    fn rebuild_vertices(&mut self) {
        self.vertices.clear();
        self.vertices.extend(self.particles.iter().map(SpriteVertex::from));
    }

    /// Remove every particle and forget any pending emission.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.vertices.clear();
        self.pending = 0.0;
    }

    // =========================================================================
    // OUTPUTS
    // =========================================================================

    /// Vertex records from the last update, farthest particle first.
    pub fn vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    /// The vertex buffer as raw bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// How the renderer should draw the vertex buffer.
    pub fn material(&self) -> &SpriteMaterial {
        &self.material
    }

    /// Live particles in draw order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Fractional particles carried to the next spawn pass.
    pub fn pending(&self) -> f32 {
        self.pending
    }

    /// Particles spawned since creation.
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    pub fn config(&self) -> &ParticleSystemConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn emitter_position(&self) -> Vec3 {
        self.emitter_position
    }

    pub fn viewpoint(&self) -> Vec3 {
        self.viewpoint
    }
}
