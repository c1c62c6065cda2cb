//! # pyre - point-sprite particle effects
//!
//! A small CPU particle engine for fire, smoke and glow effects. pyre owns the
//! simulation and hands the renderer a flat vertex buffer of camera-facing,
//! rotated point sprites; any GPU renderer that can draw instanced quads or
//! point sprites can display it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pyre::prelude::*;
//!
//! let mut fire = ParticleSystem::new(
//!     ParticleSystemConfig::default()
//!         .with_rate(200.0)
//!         .with_texture("fire.png"),
//! )?
//! .with_lifecycle(Lifecycle::fire())
//! .with_emitter_position(Vec3::new(0.1, -2.2, -1.6));
//!
//! // Once per frame:
//! fire.set_viewpoint(camera_position);
//! fire.update(0.016);
//! queue.write_buffer(&sprite_buffer, 0, fire.vertex_bytes());
//! ```
//!
//! ## Core Concepts
//!
//! ### Lifecycle curves
//!
//! Each particle's opacity, size and color are piecewise-linear functions of
//! how far through its life it is. See [`LinearSpline`] and [`Lifecycle`].
//!
//! ### Emission
//!
//! Particles are emitted at a steady `rate` per second. Fractions of a
//! particle carry over between frames, so uneven frame times never change the
//! long-run rate.
//!
//! ### Drawing
//!
//! [`ParticleSystem::vertices`] is sorted farthest-first for back-to-front
//! blending. [`SpriteVertex::layout`] and [`SpriteMaterial`] describe how to
//! bind and blend it.
//!
//! ## Feature Overview
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`spline`] | [`LinearSpline`], the [`Lerp`] trait |
//! | [`lifecycle`] | [`Lifecycle`] curves and presets |
//! | [`system`] | [`ParticleSystem`], the simulator |
//! | [`vertex`] | [`SpriteVertex`] records and their `wgpu` layout |
//! | [`visuals`] | [`SpriteMaterial`], [`BlendMode`], sprite scaling |
//! | [`config`] | [`ParticleSystemConfig`], JSON loading |
//! | [`scene`] | [`FireScene`], a ready-made frame loop context |

pub mod config;
pub mod emitter;
mod error;
pub mod lifecycle;
pub mod particle;
pub mod scene;
pub mod spawn;
pub mod spline;
pub mod system;
pub mod time;
pub mod vertex;
pub mod visuals;

pub use bytemuck;
pub use config::ParticleSystemConfig;
pub use emitter::SpawnBox;
pub use error::{ConfigError, SimulationError, SplineError};
pub use glam::{Vec3, Vec4};
pub use lifecycle::{LifeSample, Lifecycle};
pub use particle::Particle;
pub use scene::{FireScene, SceneConfig};
pub use spline::{ControlPoint, Lerp, LinearSpline};
pub use system::ParticleSystem;
pub use time::Time;
pub use vertex::SpriteVertex;
pub use visuals::{BlendMode, SpriteMaterial, TextureHandle};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use pyre::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ParticleSystemConfig;
    pub use crate::emitter::SpawnBox;
    pub use crate::lifecycle::Lifecycle;
    pub use crate::scene::{FireScene, SceneConfig};
    pub use crate::spline::{Lerp, LinearSpline};
    pub use crate::system::ParticleSystem;
    pub use crate::time::Time;
    pub use crate::vertex::SpriteVertex;
    pub use crate::visuals::{rgb_hex, BlendMode, SpriteMaterial, TextureHandle};
    pub use crate::{Vec3, Vec4};
}
