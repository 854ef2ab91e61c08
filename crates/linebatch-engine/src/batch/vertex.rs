use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// Number of `f32` slots one [`UiVertex`] occupies in a vertex buffer.
pub const UI_VERTEX_SIZE: usize = 6;

/// Interleaved UI vertex: position (z = 0), packed `0xAABBGGRR` color, uv.
///
/// The color is stored as raw bits in the float stream; read it back through
/// [`UiVertex`] rather than as an `f32`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct UiVertex {
    pub pos: [f32; 3],
    pub color: u32,
    pub uv: [f32; 2],
}

const _: () = assert!(std::mem::size_of::<UiVertex>() == UI_VERTEX_SIZE * std::mem::size_of::<f32>());

impl UiVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Unorm8x4,  // color
        2 => Float32x2  // uv
    ];

    #[inline]
    pub fn new(pos: Vec2, color: u32, uv: [f32; 2]) -> Self {
        Self { pos: [pos.x, pos.y, 0.0], color, uv }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.pos[0], self.pos[1])
    }

    /// Vertex buffer layout matching the `Vec<f32>` stream produced by batching.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<UiVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Reinterprets vertices as their float stream.
    #[inline]
    pub fn as_floats(vertices: &[UiVertex]) -> &[f32] {
        bytemuck::cast_slice(vertices)
    }

    /// Views a float stream as vertices.
    ///
    /// # Panics
    /// Panics if `floats.len()` is not a multiple of [`UI_VERTEX_SIZE`].
    #[inline]
    pub fn from_floats(floats: &[f32]) -> &[UiVertex] {
        bytemuck::cast_slice(floats)
    }
}
