//! A single simulated sprite.

use glam::Vec3;

/// One live particle.
///
/// `current_size`, `color` and `alpha` are derived from the life fraction
/// during each update and are only meaningful after the particle has been
/// through one update pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Base size chosen at spawn.
    pub size: f32,
    /// `size` scaled by the size curve.
    pub current_size: f32,
    pub color: Vec3,
    pub alpha: f32,
    /// Remaining life in seconds.
    pub life: f32,
    /// Life at spawn, in seconds.
    pub max_life: f32,
    /// Sprite rotation in radians.
    pub rotation: f32,
    /// Radians added to `rotation` every update.
    pub rotation_rate: f32,
}

impl Particle {
    /// Fraction of life elapsed: 0.0 at spawn, 1.0 at expiry.
    #[inline]
    pub fn life_fraction(&self) -> f32 {
        1.0 - self.life / self.max_life
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Sign-preserving, magnitude-bounded drag for one tick.
///
/// Returns the velocity after removing `velocity * dt * coefficient`, with the
/// removed amount clamped per axis so no component can cross zero.
#[inline]
pub fn apply_drag(velocity: Vec3, dt: f32, coefficient: f32) -> Vec3 {
    let drag = velocity * (dt * coefficient);
    let clamped = velocity.signum() * drag.abs().min(velocity.abs());
    // signum(0.0) is 1.0, but abs().min() already yields 0 there
    velocity - clamped
}
