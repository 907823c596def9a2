//! Static reference geometry for a unit cube centered at the origin.
//!
//! Every face is described by four corners of the cube, listed bottom-left,
//! bottom-right, top-right, top-left as seen from outside the cube. Splitting that
//! quad with [`QUAD_INDICES`] yields two counter-clockwise triangles whose normal
//! points away from the cube, so standard back-face culling keeps them.
//!
//! Cube corner numbering:
//!
//! ```text
//!        7--------6
//!       /|       /|        y
//!      3--------2 |        |
//!      | 4------|-5        o-- x
//!      |/       |/        /
//!      0--------1        z
//! ```
//!
//! The back face (`z = -0.5`) holds corners 0-3 and the front face (`z = +0.5`) holds
//! 4-7, each group ordered bottom-left, bottom-right, top-right, top-left.

use crate::engine_state::voxels::block::block_side::BlockSide;

/// Number of corners in the shared-vertex cube.
pub const CUBE_VERTEX_COUNT: usize = 8;
/// Number of vertices a single face emits in the per-face strategy.
pub const FACE_VERTEX_COUNT: usize = 4;
/// Number of indices a single face emits (two triangles).
pub const FACE_INDEX_COUNT: usize = 6;
/// Number of indices a fully drawn cube emits.
pub const CUBE_INDEX_COUNT: usize = FACE_INDEX_COUNT * 6;

/// The eight cube corners, addressed 0..7 by every face template.
pub const CUBE_VERTICES: [[f32; 3]; CUBE_VERTEX_COUNT] = [
    [-0.5, -0.5, -0.5], // left bottom back
    [0.5, -0.5, -0.5],  // right bottom back
    [0.5, 0.5, -0.5],   // right top back
    [-0.5, 0.5, -0.5],  // left top back
    [-0.5, -0.5, 0.5],  // left bottom front
    [0.5, -0.5, 0.5],   // right bottom front
    [0.5, 0.5, 0.5],    // right top front
    [-0.5, 0.5, 0.5],   // left top front
];

/// Local index pattern splitting a four-corner face into two triangles.
pub const QUAD_INDICES: [u32; FACE_INDEX_COUNT] = [0, 1, 2, 2, 3, 0];

/// Texture coordinates for the four corners of any face, in corner order.
pub const FACE_UVS: [[f32; 2]; FACE_VERTEX_COUNT] =
    [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// Per-corner colors used by the shared-vertex strategy when no texture is bound.
pub const CUBE_COLORS: [[f32; 3]; CUBE_VERTEX_COUNT] = [
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// The cube corners of a face: bottom-left, bottom-right, top-right, top-left from outside.
pub fn face_corners(side: BlockSide) -> [usize; FACE_VERTEX_COUNT] {
    match side {
        BlockSide::ABOVE => [7, 6, 2, 3],
        BlockSide::BELOW => [0, 1, 5, 4],
        BlockSide::WEST => [0, 4, 7, 3],
        BlockSide::EAST => [5, 1, 2, 6],
        BlockSide::NORTH => [4, 5, 6, 7],
        BlockSide::SOUTH => [1, 0, 3, 2],
    }
}

/// Six indices into [`CUBE_VERTICES`] drawing one face (shared-vertex strategy).
pub fn face_index_template(side: BlockSide) -> [u32; FACE_INDEX_COUNT] {
    let corners = face_corners(side);
    QUAD_INDICES.map(|i| corners[i as usize] as u32)
}

/// The four corner positions of one face (per-face strategy).
pub fn face_vertex_template(side: BlockSide) -> [[f32; 3]; FACE_VERTEX_COUNT] {
    face_corners(side).map(|corner| CUBE_VERTICES[corner])
}

/// Texture coordinates for the four corners of one face.
///
/// The layout is identical for every side; atlas offsets are resolved by the texture
/// slot stored alongside each vertex.
pub fn face_uv_template(_side: BlockSide) -> [[f32; 2]; FACE_VERTEX_COUNT] {
    FACE_UVS
}

/// All 36 indices of a fully drawn cube, faces in [`BlockSide::all`] order.
pub fn all_indices() -> [u32; CUBE_INDEX_COUNT] {
    let mut indices = [0; CUBE_INDEX_COUNT];
    for (face, side) in BlockSide::all().into_iter().enumerate() {
        indices[face * FACE_INDEX_COUNT..(face + 1) * FACE_INDEX_COUNT]
            .copy_from_slice(&face_index_template(side));
    }
    indices
}

/// Translates a template position by a cell offset.
#[inline]
pub fn offset_position(position: [f32; 3], offset: [f32; 3]) -> [f32; 3] {
    [
        position[0] + offset[0],
        position[1] + offset[1],
        position[2] + offset[2],
    ]
}
