//! Piecewise-linear splines over sparse control points.
//!
//! A [`LinearSpline`] maps a key `t` to a value by linearly blending the two
//! control points that bracket it. Keys outside the control-point domain clamp
//! to the nearest boundary value; nothing is extrapolated.
//!
//! Any type implementing [`Lerp`] can be interpolated, so the same spline
//! drives scalar curves (alpha, size) and color gradients.
//!
//! # Example
//!
//! ```
//! use pyre::LinearSpline;
//!
//! let mut alpha = LinearSpline::new();
//! alpha.add_point(0.0, 0.0_f32);
//! alpha.add_point(0.6, 1.0);
//! alpha.add_point(1.0, 0.0);
//!
//! assert_eq!(alpha.value_at(0.6), 1.0);
//! assert_eq!(alpha.value_at(0.3), 0.5);
//! assert_eq!(alpha.value_at(2.0), 0.0);
//! ```

use crate::error::SplineError;
use glam::{Vec3, Vec4};

/// Linear blending between two values of the same type.
///
/// `fraction` is 0.0 at `a` and 1.0 at `b`.
pub trait Lerp: Clone {
    fn lerp(fraction: f32, a: &Self, b: &Self) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(fraction: f32, a: &Self, b: &Self) -> Self {
        a + fraction * (b - a)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(fraction: f32, a: &Self, b: &Self) -> Self {
        a.lerp(*b, fraction)
    }
}

impl Lerp for Vec4 {
    #[inline]
    fn lerp(fraction: f32, a: &Self, b: &Self) -> Self {
        a.lerp(*b, fraction)
    }
}

/// A single `(t, value)` key of a spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint<V> {
    pub t: f32,
    pub value: V,
}

/// Piecewise-linear interpolation over control points added in ascending `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSpline<V: Lerp> {
    points: Vec<ControlPoint<V>>,
}

impl<V: Lerp> Default for LinearSpline<V> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<V: Lerp> LinearSpline<V> {
    /// Create an empty spline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spline from `(t, value)` pairs in ascending `t`.
    pub fn from_points(points: impl IntoIterator<Item = (f32, V)>) -> Self {
        let mut spline = Self::new();
        for (t, value) in points {
            spline.add_point(t, value);
        }
        spline
    }

    /// Append a control point.
    ///
    /// Points must arrive in non-decreasing `t`. This is not checked; an
    /// out-of-order point gives an unspecified (but non-panicking) curve.
    /// Use [`try_add_point`](Self::try_add_point) to have it checked.
    pub fn add_point(&mut self, t: f32, value: V) {
        self.points.push(ControlPoint { t, value });
    }

    /// Append a control point, rejecting non-finite or out-of-order keys.
    pub fn try_add_point(&mut self, t: f32, value: V) -> Result<(), SplineError> {
        if !t.is_finite() {
            return Err(SplineError::NonFinite(t));
        }
        if let Some(last) = self.points.last() {
            if t < last.t {
                return Err(SplineError::NonAscending { previous: last.t, t });
            }
        }
        self.add_point(t, value);
        Ok(())
    }

    /// Control points in insertion order.
    pub fn points(&self) -> &[ControlPoint<V>] {
        &self.points
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the spline has no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluate the spline at `t`.
    ///
    /// Returns `None` only when the spline has no control points.
    pub fn try_value_at(&self, t: f32) -> Option<V> {
        let last = self.points.len().checked_sub(1)?;

        let mut p1 = 0;
        for (i, point) in self.points.iter().enumerate() {
            if point.t >= t {
                break;
            }
            p1 = i;
        }

        let p2 = last.min(p1 + 1);
        let a = &self.points[p1];
        if p1 == p2 {
            return Some(a.value.clone());
        }

        let b = &self.points[p2];
        let span = b.t - a.t;
        // Coincident keys form a step; avoid the 0/0 blend.
        if span <= 0.0 {
            return Some(a.value.clone());
        }
        let fraction = (t - a.t) / span;
        Some(V::lerp(fraction, &a.value, &b.value))
    }

    /// Evaluate the spline at `t`.
    ///
    /// # Panics
    ///
    /// Panics if the spline has no control points.
    pub fn value_at(&self, t: f32) -> V {
        match self.try_value_at(t) {
            Some(value) => value,
            None => panic!("value_at called on a spline with no control points"),
        }
    }
}
