//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in window pixels with an RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Buffer layout for the GPU layer that uploads these vertices
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Raw bytes for a vertex buffer upload
pub fn vertex_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Fixed colors (RGBA, 0-1)
pub mod colors {
    pub const STATUS_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HELP_PANEL: [f32; 4] = [50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0];
    pub const HELP_BORDER: [f32; 4] = [1.0, 50.0 / 255.0, 50.0 / 255.0, 1.0];
    pub const HELP_TEXT: [f32; 4] = [128.0 / 255.0, 128.0 / 255.0, 1.0, 1.0];
}
