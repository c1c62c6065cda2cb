//! Attribute curves over a particle's life.
//!
//! Every particle is keyed by its life fraction `t`, which is `0.0` at spawn
//! and `1.0` at expiry. A [`Lifecycle`] bundles the three curves that turn
//! that fraction into visible attributes:
//!
//! | Curve | Type | Meaning |
//! |-------|------|---------|
//! | `alpha` | `f32` | Opacity, 0.0-1.0 |
//! | `size` | `f32` | Multiplier on the particle's base size |
//! | `color` | `Vec3` | RGB tint, 0.0-1.0 |
//!
//! # Presets
//!
//! ```ignore
//! let fire = Lifecycle::fire();
//! let smoke = Lifecycle::smoke();
//! ```
//!
//! # Custom curves
//!
//! ```ignore
//! let sparks = Lifecycle::new()
//!     .alpha([(0.0, 1.0), (1.0, 0.0)])
//!     .size([(0.0, 1.0), (1.0, 0.2)])
//!     .color([(0.0, rgb_hex(0xffffff)), (1.0, rgb_hex(0xff6600))]);
//! ```

use crate::spline::LinearSpline;
use crate::visuals::rgb_hex;
use glam::Vec3;

/// Attributes sampled from a [`Lifecycle`] at one life fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeSample {
    pub alpha: f32,
    pub size_scale: f32,
    pub color: Vec3,
}

/// Alpha, size, and color curves keyed by life fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Lifecycle {
    alpha: LinearSpline<f32>,
    size: LinearSpline<f32>,
    color: LinearSpline<Vec3>,
}

impl Default for Lifecycle {
    /// Fully opaque white particles at their base size for their whole life.
    fn default() -> Self {
        Self {
            alpha: LinearSpline::from_points([(0.0, 1.0)]),
            size: LinearSpline::from_points([(0.0, 1.0)]),
            color: LinearSpline::from_points([(0.0, Vec3::ONE)]),
        }
    }
}

impl Lifecycle {
    /// Constant curves: opaque, unscaled, white.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // PRESETS
    // =========================================================================

    /// Flame: fades in to full opacity at 60% of life then out, grows from
    /// nothing to full size, and cools from white to a soft red.
    pub fn fire() -> Self {
        Self {
            alpha: LinearSpline::from_points([(0.0, 0.0), (0.6, 1.0), (1.0, 0.0)]),
            size: LinearSpline::from_points([(0.0, 0.0), (1.0, 1.0)]),
            color: LinearSpline::from_points([
                (0.0, rgb_hex(0xffffff)),
                (1.0, rgb_hex(0xff8080)),
            ]),
        }
    }

    /// Smoke: thin puffs that swell and darken as they fade.
    pub fn smoke() -> Self {
        Self {
            alpha: LinearSpline::from_points([(0.0, 0.0), (0.2, 0.5), (1.0, 0.0)]),
            size: LinearSpline::from_points([(0.0, 0.5), (1.0, 2.0)]),
            color: LinearSpline::from_points([
                (0.0, rgb_hex(0x666666)),
                (1.0, rgb_hex(0x262626)),
            ]),
        }
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    /// Replace the alpha curve. Points must be in ascending `t`.
    pub fn alpha(mut self, points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        self.alpha = LinearSpline::from_points(points);
        self
    }

    /// Replace the size-multiplier curve. Points must be in ascending `t`.
    pub fn size(mut self, points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        self.size = LinearSpline::from_points(points);
        self
    }

    /// Replace the color curve. Points must be in ascending `t`.
    pub fn color(mut self, points: impl IntoIterator<Item = (f32, Vec3)>) -> Self {
        self.color = LinearSpline::from_points(points);
        self
    }

    /// Replace the alpha curve with a prebuilt spline.
    pub fn with_alpha_spline(mut self, spline: LinearSpline<f32>) -> Self {
        self.alpha = spline;
        self
    }

    /// Replace the size curve with a prebuilt spline.
    pub fn with_size_spline(mut self, spline: LinearSpline<f32>) -> Self {
        self.size = spline;
        self
    }

    /// Replace the color curve with a prebuilt spline.
    pub fn with_color_spline(mut self, spline: LinearSpline<Vec3>) -> Self {
        self.color = spline;
        self
    }

    pub fn alpha_spline(&self) -> &LinearSpline<f32> {
        &self.alpha
    }

    pub fn size_spline(&self) -> &LinearSpline<f32> {
        &self.size
    }

    pub fn color_spline(&self) -> &LinearSpline<Vec3> {
        &self.color
    }

    /// Sample all three curves at life fraction `t`.
    ///
    /// An empty curve samples as its neutral value (1.0 for alpha and size,
    /// white for color).
    pub fn sample(&self, t: f32) -> LifeSample {
        LifeSample {
            alpha: self.alpha.try_value_at(t).unwrap_or(1.0),
            size_scale: self.size.try_value_at(t).unwrap_or(1.0),
            color: self.color.try_value_at(t).unwrap_or(Vec3::ONE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_preset() {
        let fire = Lifecycle::fire();

        let birth = fire.sample(0.0);
        assert_eq!(birth.alpha, 0.0);
        assert_eq!(birth.size_scale, 0.0);
        assert_eq!(birth.color, Vec3::ONE);

        let peak = fire.sample(0.6);
        assert_eq!(peak.alpha, 1.0);
        assert!((peak.size_scale - 0.6).abs() < 1e-6);

        let death = fire.sample(1.0);
        assert_eq!(death.alpha, 0.0);
        assert_eq!(death.size_scale, 1.0);
        assert_eq!(death.color, rgb_hex(0xff8080));
    }

    #[test]
    fn test_default_is_constant() {
        let lifecycle = Lifecycle::new();
        for t in [0.0, 0.5, 1.0] {
            let s = lifecycle.sample(t);
            assert_eq!(s.alpha, 1.0);
            assert_eq!(s.size_scale, 1.0);
            assert_eq!(s.color, Vec3::ONE);
        }
    }

    #[test]
    fn test_builder_chain() {
        let lifecycle = Lifecycle::new()
            .alpha([(0.0, 1.0), (1.0, 0.0)])
            .size([(0.0, 2.0)])
            .color([(0.0, Vec3::X), (1.0, Vec3::Z)]);

        let s = lifecycle.sample(0.5);
        assert!((s.alpha - 0.5).abs() < 1e-6);
        assert_eq!(s.size_scale, 2.0);
        assert!((s.color - Vec3::new(0.5, 0.0, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_empty_curve_samples_neutral() {
        let lifecycle = Lifecycle::new().alpha(Vec::<(f32, f32)>::new());
        assert_eq!(lifecycle.sample(0.3).alpha, 1.0);
    }
}
