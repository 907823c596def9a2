//! Vertex data structures and layouts for voxel rendering.
//!
//! This module defines the interleaved vertex format a chunk mesh is uploaded in and
//! the matching buffer layout for the shader pipeline.

/// A vertex in the voxel rendering pipeline.
///
/// Carries both attribute streams a [`MeshData`](super::meshing::MeshData) can hold;
/// whichever stream the mesh does not use is left at a neutral value.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Color: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
/// - Texture Index: u32 (4 bytes)
///
/// Total size: 36 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in chunk space
    position: [f32; 3],
    /// RGB color
    color: [f32; 3],
    /// UV texture coordinates (normalized 0.0-1.0)
    tex_coords: [f32; 2],
    /// Index of the texture in the texture array
    texture_index: u32,
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(
        position: [f32; 3],
        color: [f32; 3],
        tex_coords: [f32; 2],
        texture_index: u32,
    ) -> Self {
        Vertex {
            position,
            color,
            tex_coords,
            texture_index,
        }
    }

    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn tex_coords(&self) -> [f32; 2] {
        self.tex_coords
    }

    pub fn texture_index(&self) -> u32 {
        self.texture_index
    }

    /// Returns the vertex buffer layout description for the shader pipeline.
    ///
    /// # Shader Attributes
    /// - `location = 0`: position (vec3<f32>)
    /// - `location = 1`: color (vec3<f32>)
    /// - `location = 2`: tex_coords (vec2<f32>)
    /// - `location = 3`: texture_index (u32)
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Uint32,
                },
            ],
        }
    }
}
