//! Face visibility for a single solid cell.
//!
//! A face is emitted when the neighbouring cell across it is air. Faces on the chunk
//! boundary have no neighbour data; [`EdgePolicy`] decides what they border.

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use crate::engine_state::voxels::block::block_side::BlockSide;
use crate::engine_state::voxels::block::block_type::BlockType;
use crate::error::VoxelError;

use super::Chunk;

/// How faces on the outer boundary of a chunk are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Every boundary face of a solid boundary cell is exposed.
    #[default]
    Expose,
    /// Space outside the chunk counts as solid, so boundary faces are culled.
    ///
    /// This is what a neighbouring loaded chunk would look like.
    Cull,
}

/// Returns the sides of the solid cell at `coordinate` that must be rendered.
///
/// Each exposed side appears once, in [`BlockSide::all`] order.
///
/// # Errors
/// * [`VoxelError::OutOfBounds`] if `coordinate` is outside the chunk.
/// * [`VoxelError::InvalidInput`] if the cell is air.
pub fn sides_exposed_to_air(
    chunk: &Chunk,
    coordinate: Point3<i32>,
    edge_policy: EdgePolicy,
) -> Result<Vec<BlockSide>, VoxelError> {
    if chunk.get_block(coordinate)? == BlockType::AIR {
        return Err(VoxelError::InvalidInput(format!(
            "block at ({}, {}, {}) is an air block",
            coordinate.x, coordinate.y, coordinate.z
        )));
    }

    let exposed = chunk.generate_adjacent_blocks(
        coordinate.x as usize,
        coordinate.y as usize,
        coordinate.z as usize,
        edge_policy,
    );

    Ok(BlockSide::all()
        .into_iter()
        .filter(|side| exposed[*side as usize])
        .collect())
}

impl Chunk {
    /// Returns the sides of a solid cell exposed to air, with chunk boundaries exposed.
    ///
    /// See [`sides_exposed_to_air`].
    pub fn sides_exposed_to_air(
        &self,
        coordinate: Point3<i32>,
    ) -> Result<Vec<BlockSide>, VoxelError> {
        sides_exposed_to_air(self, coordinate, EdgePolicy::Expose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::chunk::ChunkDimensions;

    fn p(x: i32, y: i32, z: i32) -> Point3<i32> {
        Point3::new(x, y, z)
    }

    #[test]
    fn isolated_block_exposes_all_sides() {
        let mut chunk = Chunk::default();
        chunk.set_block(p(5, 5, 5), BlockType::DIRT).unwrap();

        let sides = chunk.sides_exposed_to_air(p(5, 5, 5)).unwrap();
        assert_eq!(sides, BlockSide::all().to_vec());
    }

    #[test]
    fn covered_sides_are_hidden() {
        let mut chunk = Chunk::default();
        chunk.set_block(p(5, 5, 5), BlockType::DIRT).unwrap();
        chunk.set_block(p(6, 5, 5), BlockType::DIRT).unwrap();
        chunk.set_block(p(5, 4, 5), BlockType::DIRT).unwrap();
        chunk.set_block(p(5, 6, 5), BlockType::DIRT).unwrap();

        let sides = chunk.sides_exposed_to_air(p(5, 5, 5)).unwrap();
        assert_eq!(
            sides,
            vec![BlockSide::WEST, BlockSide::NORTH, BlockSide::SOUTH]
        );
    }

    #[test]
    fn buried_block_exposes_nothing() {
        let mut chunk = Chunk::new(ChunkDimensions::new(8, 8, 8));
        chunk.fill_up_to_y(8, BlockType::STONE);

        assert!(chunk.sides_exposed_to_air(p(3, 3, 3)).unwrap().is_empty());
    }

    #[test]
    fn corner_block_exposes_boundary_faces() {
        let mut chunk = Chunk::default();
        chunk.set_block(p(0, 0, 0), BlockType::DIRT).unwrap();
        chunk.set_block(p(1, 0, 0), BlockType::DIRT).unwrap();
        chunk.set_block(p(0, 0, 1), BlockType::DIRT).unwrap();

        let sides = chunk.sides_exposed_to_air(p(0, 0, 0)).unwrap();
        assert_eq!(
            sides,
            vec![
                BlockSide::ABOVE,
                BlockSide::BELOW,
                BlockSide::WEST,
                BlockSide::SOUTH
            ]
        );
    }

    #[test]
    fn far_boundaries_are_exposed_symmetrically() {
        let mut chunk = Chunk::new(ChunkDimensions::new(4, 4, 4));
        chunk.fill_up_to_y(4, BlockType::DIRT);

        let sides = chunk.sides_exposed_to_air(p(3, 3, 3)).unwrap();
        assert_eq!(
            sides,
            vec![BlockSide::ABOVE, BlockSide::EAST, BlockSide::NORTH]
        );
    }

    #[test]
    fn cull_policy_hides_boundary_faces() {
        let mut chunk = Chunk::new(ChunkDimensions::new(4, 4, 4));
        chunk.set_block(p(0, 0, 0), BlockType::DIRT).unwrap();

        let sides = sides_exposed_to_air(&chunk, p(0, 0, 0), EdgePolicy::Cull).unwrap();
        assert_eq!(
            sides,
            vec![BlockSide::ABOVE, BlockSide::EAST, BlockSide::NORTH]
        );
    }

    #[test]
    fn air_cell_is_invalid_input() {
        let chunk = Chunk::default();
        assert!(matches!(
            chunk.sides_exposed_to_air(p(1, 1, 1)),
            Err(VoxelError::InvalidInput(_))
        ));
    }

    #[test]
    fn outside_cell_is_out_of_bounds() {
        let chunk = Chunk::default();
        assert!(matches!(
            chunk.sides_exposed_to_air(p(16, 1, 1)),
            Err(VoxelError::OutOfBounds { .. })
        ));
        for origin in [p(-1, 0, 0), p(0, -1, 0), p(0, 0, 16), p(100, 200, 300)] {
            assert!(matches!(
                sides_exposed_to_air(&chunk, origin, EdgePolicy::Cull),
                Err(VoxelError::OutOfBounds { .. })
            ));
        }
    }
}
