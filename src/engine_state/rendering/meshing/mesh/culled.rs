//! Face-culled meshing for a whole chunk.
//!
//! Every solid cell contributes only the faces that border air (or the chunk edge,
//! per [`EdgePolicy`]). Buried cells contribute nothing. Emission follows the chunk's
//! storage order, x outer, y middle, z inner.

use crate::engine_state::voxels::{
    block::block_side::BlockSide,
    chunk::{Chunk, EdgePolicy},
};

use super::face::CUBE_INDEX_COUNT;
use super::mesh::{GeometryStrategy, MeshData};

/// Builds the face-culled mesh of `chunk`.
///
/// With [`GeometryStrategy::SharedVertex`] each visible cell appends its eight corners
/// once and every exposed face indexes into them. With [`GeometryStrategy::PerFace`]
/// every exposed face appends its own four corners.
pub fn build_mesh(chunk: &Chunk, strategy: GeometryStrategy, edge_policy: EdgePolicy) -> MeshData {
    let mut mesh = MeshData::new(strategy);

    for (position, block_type) in chunk.solid_blocks() {
        let exposed =
            chunk.generate_adjacent_blocks(position.x, position.y, position.z, edge_policy);
        if !exposed.iter().any(|e| *e) {
            continue;
        }

        let offset = [position.x as f32, position.y as f32, position.z as f32];
        let visible_sides = BlockSide::all()
            .into_iter()
            .filter(|side| exposed[*side as usize]);

        match strategy {
            GeometryStrategy::SharedVertex => {
                let base = mesh.push_cube_vertices(offset);
                for side in visible_sides {
                    mesh.push_cube_face_indices(side, base);
                }
            }
            GeometryStrategy::PerFace => {
                for side in visible_sides {
                    mesh.push_face(side, block_type, offset);
                }
            }
        }
    }

    mesh
}

/// Builds a shared-vertex mesh that draws every face of every solid cell.
///
/// This is the baseline face culling is measured against.
pub fn build_unculled_mesh(chunk: &Chunk) -> MeshData {
    let mut mesh = MeshData::new(GeometryStrategy::SharedVertex);
    mesh.indices.reserve(chunk.solid_count() * CUBE_INDEX_COUNT);

    for (position, _) in chunk.solid_blocks() {
        let base =
            mesh.push_cube_vertices([position.x as f32, position.y as f32, position.z as f32]);
        for side in BlockSide::all() {
            mesh.push_cube_face_indices(side, base);
        }
    }

    mesh
}
