//! Vertex records for point-sprite rendering.
//!
//! Each live particle becomes one [`SpriteVertex`]. The record is `Pod`, so a
//! whole frame can be uploaded with a single byte copy:
//!
//! ```ignore
//! queue.write_buffer(&vertex_buffer, 0, system.vertex_bytes());
//! ```
//!
//! # Layout
//!
//! | Location | Channel | Format | Offset |
//! |----------|---------|--------|--------|
//! | 0 | `position` | `Float32x3` | 0 |
//! | 1 | `size` | `Float32` | 12 |
//! | 2 | `color` (rgb + alpha) | `Float32x4` | 16 |
//! | 3 | `angle` | `Float32` | 32 |
//!
//! The stride is 36 bytes with no padding; vertex buffers only require
//! 4-byte alignment.

use crate::particle::Particle;
use bytemuck::{Pod, Zeroable};

/// Per-particle vertex attributes, in draw order.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// World-space sprite size.
    pub size: f32,
    /// RGB tint and alpha.
    pub color: [f32; 4],
    /// Sprite rotation in radians.
    pub angle: f32,
}

impl SpriteVertex {
    /// Byte stride of one vertex.
    pub const STRIDE: u64 = std::mem::size_of::<SpriteVertex>() as u64;

    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32,
        2 => Float32x4,
        3 => Float32
    ];

    /// Vertex buffer layout, one vertex per sprite instance.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl From<&Particle> for SpriteVertex {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position.to_array(),
            size: p.current_size,
            color: p.color.extend(p.alpha).to_array(),
            angle: p.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_stride_has_no_padding() {
        assert_eq!(SpriteVertex::STRIDE, 36);
        assert_eq!(std::mem::align_of::<SpriteVertex>(), 4);
    }

    #[test]
    fn test_layout_offsets() {
        let layout = SpriteVertex::layout();
        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 16, 32]);
        assert_eq!(layout.attributes[2].format, wgpu::VertexFormat::Float32x4);
        assert_eq!(layout.array_stride, 36);
    }

    #[test]
    fn test_from_particle() {
        let particle = Particle {
            position: Vec3::new(1.0, 2.0, 3.0),
            velocity: Vec3::Y,
            size: 3.0,
            current_size: 1.5,
            color: Vec3::new(1.0, 0.5, 0.25),
            alpha: 0.75,
            life: 1.0,
            max_life: 1.5,
            rotation: 0.3,
            rotation_rate: 0.001,
        };
        let vertex = SpriteVertex::from(&particle);
        assert_eq!(vertex.position, [1.0, 2.0, 3.0]);
        assert_eq!(vertex.size, 1.5);
        assert_eq!(vertex.color, [1.0, 0.5, 0.25, 0.75]);
        assert_eq!(vertex.angle, 0.3);
    }

    #[test]
    fn test_bytes_view() {
        let vertices = [SpriteVertex::default(); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 3 * 36);
    }
}
