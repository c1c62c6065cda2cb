//! Sprite material description handed to the renderer.
//!
//! pyre never talks to a GPU device. It describes how its vertex buffer should
//! be drawn: which texture to sample, how sprites blend, how depth is handled,
//! and the `point_multiplier` that converts a particle's world size into a
//! screen-space point size.
//!
//! The renderer is expected to compute, per sprite:
//!
//! ```text
//! point_size = size * point_multiplier / clip_position.w
//! ```
//!
//! and rotate the sprite's texture coordinates by the vertex `angle`.
//!
//! # Example
//!
//! ```ignore
//! let mut material = SpriteMaterial::new(TextureHandle::new("fire.png"));
//! material.resize(1080.0);
//! let blend = material.blend_mode.blend_state();
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Vertical field of view at which `point_multiplier` equals `height / (2 tan 30°)`.
pub const DEFAULT_FOV_Y_DEGREES: f32 = 60.0;

/// Convert a packed `0xRRGGBB` color into linear 0.0-1.0 RGB components.
///
/// ```
/// use pyre::visuals::rgb_hex;
/// assert_eq!(rgb_hex(0xff0000), glam::Vec3::new(1.0, 0.0, 0.0));
/// ```
pub fn rgb_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

/// Scale factor from world-space particle size to screen-space point size.
///
/// Keeps a sprite's on-screen size proportional to the viewport height, so
/// resizing the window does not change how large the flames look.
pub fn point_multiplier(viewport_height: f32, fov_y_degrees: f32) -> f32 {
    viewport_height / (2.0 * (fov_y_degrees.to_radians() * 0.5).tan())
}

/// Opaque reference to the sprite texture.
///
/// Usually a path or URL. pyre passes it through to the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureHandle(String);

impl TextureHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextureHandle {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Blending mode for particle sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// Standard alpha blending.
    Alpha,

    /// Additive blending (default).
    ///
    /// Overlapping sprites brighten each other. Used for fire and glow.
    #[default]
    Additive,

    /// Multiplicative blending. Darkens what is behind the sprite.
    Multiply,
}

impl BlendMode {
    /// The `wgpu` blend state for this mode.
    pub fn blend_state(self) -> wgpu::BlendState {
        match self {
            BlendMode::Alpha => wgpu::BlendState::ALPHA_BLENDING,
            BlendMode::Additive => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
            },
            BlendMode::Multiply => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::Dst,
                    dst_factor: wgpu::BlendFactor::Zero,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent::OVER,
            },
        }
    }
}

/// How the renderer should draw a particle system's sprites.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteMaterial {
    /// Sprite texture, sampled with rotated point coordinates.
    pub texture: TextureHandle,
    /// Color blending against the framebuffer.
    pub blend_mode: BlendMode,
    /// Sprites are hidden behind opaque geometry.
    pub depth_test: bool,
    /// Sprites never occlude each other through the depth buffer.
    pub depth_write: bool,
    /// Sprites are drawn in the transparent pass.
    pub transparent: bool,
    /// Camera vertical field of view, in degrees.
    fov_y_degrees: f32,
    /// Viewport height in pixels.
    viewport_height: f32,
    /// Cached `point_multiplier(viewport_height, fov_y_degrees)`.
    point_multiplier: f32,
}

impl SpriteMaterial {
    /// Additive, depth-tested, non-depth-writing material with a 1-pixel-high
    /// viewport. Call [`resize`](Self::resize) once the viewport is known.
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            blend_mode: BlendMode::Additive,
            depth_test: true,
            depth_write: false,
            transparent: true,
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            viewport_height: 1.0,
            point_multiplier: point_multiplier(1.0, DEFAULT_FOV_Y_DEGREES),
        }
    }

    /// Set the camera's vertical field of view.
    pub fn with_fov_y(mut self, degrees: f32) -> Self {
        self.set_fov_y(degrees);
        self
    }

    /// Update the viewport height and recompute the point multiplier.
    pub fn resize(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
        self.point_multiplier = point_multiplier(self.viewport_height, self.fov_y_degrees);
        log::debug!(
            "sprite material resized: height={} point_multiplier={:.3}",
            viewport_height,
            self.point_multiplier
        );
    }

    /// Update the vertical field of view and recompute the point multiplier.
    pub fn set_fov_y(&mut self, degrees: f32) {
        self.fov_y_degrees = degrees;
        self.point_multiplier = point_multiplier(self.viewport_height, self.fov_y_degrees);
    }

    pub fn point_multiplier(&self) -> f32 {
        self.point_multiplier
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    /// Depth state for a sprite pipeline rendering into `format`.
    ///
    /// Returns `None` when depth testing is off.
    pub fn depth_stencil_state(
        &self,
        format: wgpu::TextureFormat,
    ) -> Option<wgpu::DepthStencilState> {
        self.depth_test.then(|| wgpu::DepthStencilState {
            format,
            depth_write_enabled: self.depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(rgb_hex(0xffffff), Vec3::ONE);
        assert_eq!(rgb_hex(0x000000), Vec3::ZERO);
        let salmon = rgb_hex(0xff8080);
        assert_eq!(salmon.x, 1.0);
        assert!((salmon.y - 128.0 / 255.0).abs() < 1e-6);
        assert!((salmon.z - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_multiplier_default_fov() {
        // 60 degree fov: height / (2 * tan(30 deg))
        let expected = 900.0 / (2.0 * 30.0_f32.to_radians().tan());
        assert!((point_multiplier(900.0, 60.0) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_point_multiplier_scales_with_height() {
        let small = point_multiplier(500.0, 45.0);
        let large = point_multiplier(1000.0, 45.0);
        assert!((large / small - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_material_defaults() {
        let material = SpriteMaterial::new("fire.png".into());
        assert_eq!(material.blend_mode, BlendMode::Additive);
        assert!(material.depth_test);
        assert!(!material.depth_write);
        assert!(material.transparent);
        assert_eq!(material.texture.as_str(), "fire.png");
    }

    #[test]
    fn test_material_resize() {
        let mut material = SpriteMaterial::new(TextureHandle::default());
        material.resize(720.0);
        assert_eq!(material.viewport_height(), 720.0);
        assert!((material.point_multiplier() - point_multiplier(720.0, 60.0)).abs() < 1e-4);

        material.set_fov_y(10.0);
        assert!((material.point_multiplier() - point_multiplier(720.0, 10.0)).abs() < 1e-2);
    }

    #[test]
    fn test_depth_state_follows_flags() {
        let material = SpriteMaterial::new(TextureHandle::default());
        let depth = material
            .depth_stencil_state(wgpu::TextureFormat::Depth32Float)
            .unwrap();
        assert!(!depth.depth_write_enabled);

        let mut untested = material.clone();
        untested.depth_test = false;
        assert!(untested
            .depth_stencil_state(wgpu::TextureFormat::Depth32Float)
            .is_none());
    }

    #[test]
    fn test_additive_blend_adds_destination() {
        let state = BlendMode::Additive.blend_state();
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::One);
        assert_eq!(state.color.operation, wgpu::BlendOperation::Add);
    }
}
