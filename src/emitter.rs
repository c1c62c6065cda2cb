//! Spawn volumes around the emitter position.
//!
//! New particles appear at the emitter's world position plus a random offset
//! drawn from a [`SpawnBox`]. The box is given in unit coordinates and scaled
//! by the configured spawn radius, so one box shape serves emitters of any size.
//!
//! # The flame box
//!
//! [`SpawnBox::FLAME`] is deliberately lopsided:
//!
//! | Axis | Unit range | With `radius = 0.5` |
//! |------|-----------|---------------------|
//! | x | `[-1.0, 0.5)` | `[-0.5, 0.25)` |
//! | y | `[-1.0, -0.875)` | `[-0.5, -0.4375)` |
//! | z | `[-1.0, 0.5)` | `[-0.5, 0.25)` |
//!
//! The thin vertical slab sits just under the emitter, so flames start from
//! a flat bed rather than a cube of embers.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned box of spawn offsets, in units of the spawn radius.
///
/// Ranges are half-open: `min <= offset < max` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl SpawnBox {
    /// Flat, off-center bed used by the flame effect.
    pub const FLAME: SpawnBox = SpawnBox {
        min: Vec3::new(-1.0, -1.0, -1.0),
        max: Vec3::new(0.5, -0.875, 0.5),
    };

    /// Symmetric cube from -1 to 1 on every axis.
    pub const CUBE: SpawnBox = SpawnBox {
        min: Vec3::splat(-1.0),
        max: Vec3::splat(1.0),
    };

    /// A single point at the emitter origin.
    pub const POINT: SpawnBox = SpawnBox {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Whether every axis satisfies `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Draw a random offset, scaled by `radius`.
    ///
    /// Degenerate axes (`min == max`) always yield `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, radius: f32) -> Vec3 {
        let unit = Vec3::new(
            lerp_axis(self.min.x, self.max.x, rng.gen::<f32>()),
            lerp_axis(self.min.y, self.max.y, rng.gen::<f32>()),
            lerp_axis(self.min.z, self.max.z, rng.gen::<f32>()),
        );
        unit * radius
    }
}

impl Default for SpawnBox {
    fn default() -> Self {
        SpawnBox::FLAME
    }
}

#[inline]
fn lerp_axis(min: f32, max: f32, r: f32) -> f32 {
    min + r * (max - min)
}
