//! Error types for pyre.
//!
//! The per-frame simulation path never fails. These errors come from the
//! checked entry points ([`ParticleSystem::try_update`],
//! [`LinearSpline::try_add_point`]) and from configuration loading.
//!
//! [`ParticleSystem::try_update`]: crate::ParticleSystem::try_update
//! [`LinearSpline::try_add_point`]: crate::LinearSpline::try_add_point

use std::fmt;

/// Errors raised when appending control points to a spline.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// The new point's `t` is smaller than the last point's `t`.
    NonAscending {
        /// `t` of the last point already in the spline.
        previous: f32,
        /// `t` of the rejected point.
        t: f32,
    },
    /// The point's `t` is NaN or infinite.
    NonFinite(f32),
}

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplineError::NonAscending { previous, t } => write!(
                f,
                "Control point at t={} precedes the previous point at t={}. \
                 Points must be added in ascending order.",
                t, previous
            ),
            SplineError::NonFinite(t) => write!(f, "Control point t must be finite, got {}", t),
        }
    }
}

impl std::error::Error for SplineError {}

/// Errors raised by the checked simulation step.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Elapsed time was below zero.
    NegativeElapsed(f32),
    /// Elapsed time was NaN or infinite.
    NonFiniteElapsed(f32),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::NegativeElapsed(dt) => {
                write!(f, "Elapsed time must not be negative, got {}s", dt)
            }
            SimulationError::NonFiniteElapsed(dt) => {
                write!(f, "Elapsed time must be finite, got {}", dt)
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A field holds a value the simulator cannot run with.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },
    /// The configuration text is not valid JSON for this schema.
    Parse(serde_json::Error),
    /// Failed to read or write the configuration file.
    Io(std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid value for `{}`: {}", field, reason)
            }
            ConfigError::Parse(e) => write!(f, "Failed to parse configuration: {}", e),
            ConfigError::Io(e) => write!(f, "Failed to access configuration file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
