//! GPU buffers for one chunk mesh.
//!
//! The mesh is interleaved into [`Vertex`] values and uploaded as one vertex buffer
//! and one `u32` index buffer, drawn with a single indexed draw call.

use wgpu::util::DeviceExt;

use super::meshing::MeshData;
use super::Vertex;

/// Vertex and index buffers holding an uploaded [`MeshData`].
pub struct GpuChunkMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuChunkMesh {
    /// Creates buffers initialised with the contents of `mesh`.
    pub fn upload(device: &wgpu::Device, mesh: &MeshData) -> Self {
        let vertices = mesh.to_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Chunk Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Chunk Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
        }
    }

    /// Number of indices the draw call covers.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Binds the buffers and issues the draw. Empty meshes record nothing.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 {
            return;
        }

        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
