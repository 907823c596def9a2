//! Mesh data structures and operations for voxel rendering.
//!
//! A [`MeshData`] is the flat buffer triple handed to the renderer: positions,
//! triangle indices and one per-vertex attribute stream (colors or texture
//! coordinates). Counts are always derived from the buffers themselves.

use serde::{Deserialize, Serialize};

use crate::engine_state::rendering::Vertex;
use crate::engine_state::voxels::block::block_side::BlockSide;
use crate::engine_state::voxels::block::block_type::BlockType;

use super::face::{
    self, CUBE_COLORS, CUBE_VERTEX_COUNT, CUBE_VERTICES, FACE_INDEX_COUNT, FACE_VERTEX_COUNT,
    QUAD_INDICES,
};

/// How cube geometry is laid out in the vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryStrategy {
    /// All eight cube corners once per visible block, faces index into them.
    ///
    /// Paired with per-corner colors.
    SharedVertex,
    /// Four fresh vertices per emitted face.
    ///
    /// Paired with per-face texture coordinates, which cannot be shared across faces.
    #[default]
    PerFace,
}

/// The per-vertex attribute stream of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexAttributes {
    /// One RGB color per vertex.
    Colors(Vec<[f32; 3]>),
    /// One UV pair and one texture slot per vertex.
    Textured {
        /// Texture coordinates.
        uvs: Vec<[f32; 2]>,
        /// Texture slot resolved from the block type and face.
        texture_indices: Vec<u32>,
    },
}

impl VertexAttributes {
    /// Number of vertices the stream covers.
    pub fn len(&self) -> usize {
        match self {
            VertexAttributes::Colors(colors) => colors.len(),
            VertexAttributes::Textured { uvs, .. } => uvs.len(),
        }
    }

    /// Whether the stream is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A flat triangle mesh for one chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex positions in chunk space.
    pub positions: Vec<[f32; 3]>,
    /// Triangle list indices into `positions`.
    pub indices: Vec<u32>,
    /// Colors or texture coordinates, one entry per position.
    pub attributes: VertexAttributes,
}

impl MeshData {
    /// Creates an empty mesh with the attribute stream matching `strategy`.
    pub fn new(strategy: GeometryStrategy) -> Self {
        let attributes = match strategy {
            GeometryStrategy::SharedVertex => VertexAttributes::Colors(Vec::new()),
            GeometryStrategy::PerFace => VertexAttributes::Textured {
                uvs: Vec::new(),
                texture_indices: Vec::new(),
            },
        };

        MeshData {
            positions: Vec::new(),
            indices: Vec::new(),
            attributes,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Number of indices the renderer must draw.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Number of emitted faces (two triangles each).
    pub fn face_count(&self) -> u32 {
        self.index_count() / FACE_INDEX_COUNT as u32
    }

    /// Whether the mesh holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends the eight corners of a cube centered on `offset`.
    ///
    /// # Returns
    /// The index of the first appended vertex.
    pub fn push_cube_vertices(&mut self, offset: [f32; 3]) -> u32 {
        let base = self.vertex_count();
        self.positions.extend(
            CUBE_VERTICES
                .iter()
                .map(|corner| face::offset_position(*corner, offset)),
        );

        match &mut self.attributes {
            VertexAttributes::Colors(colors) => colors.extend_from_slice(&CUBE_COLORS),
            VertexAttributes::Textured {
                uvs,
                texture_indices,
            } => {
                // Shared corners have no single face, so they sample the texture origin
                uvs.extend(std::iter::repeat([0.0, 0.0]).take(CUBE_VERTEX_COUNT));
                texture_indices.extend(std::iter::repeat(0).take(CUBE_VERTEX_COUNT));
            }
        }

        base
    }

    /// Appends the six indices of one face of a cube whose corners start at `base`.
    pub fn push_cube_face_indices(&mut self, side: BlockSide, base: u32) {
        self.indices
            .extend(face::face_index_template(side).iter().map(|i| i + base));
    }

    /// Appends four fresh vertices and six indices for one face centered on `offset`.
    pub fn push_face(&mut self, side: BlockSide, block_type: BlockType, offset: [f32; 3]) {
        let base = self.vertex_count();
        self.positions.extend(
            face::face_vertex_template(side)
                .iter()
                .map(|corner| face::offset_position(*corner, offset)),
        );

        match &mut self.attributes {
            VertexAttributes::Textured {
                uvs,
                texture_indices,
            } => {
                uvs.extend_from_slice(&face::face_uv_template(side));
                let slot = block_type.texture_indices()[side as usize];
                texture_indices.extend(std::iter::repeat(slot).take(FACE_VERTEX_COUNT));
            }
            VertexAttributes::Colors(colors) => {
                colors.extend(std::iter::repeat(block_type.color()).take(FACE_VERTEX_COUNT));
            }
        }

        self.indices.extend(QUAD_INDICES.iter().map(|i| i + base));
    }

    /// Interleaves the buffers into GPU vertices.
    ///
    /// Fields the attribute stream does not carry are zeroed.
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, position)| match &self.attributes {
                VertexAttributes::Colors(colors) => {
                    Vertex::new(*position, colors[i], [0.0, 0.0], 0)
                }
                VertexAttributes::Textured {
                    uvs,
                    texture_indices,
                } => Vertex::new(*position, [1.0, 1.0, 1.0], uvs[i], texture_indices[i]),
            })
            .collect()
    }
}
