//! # Block Side Module
//!
//! This module defines the six faces of a voxel block and the axis offsets that
//! connect a cell to its neighbour across each face.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each variant is assigned a fixed integer value so it can index per-face tables
/// such as the texture slots in [`BLOCK_TYPE_TO_TEXTURE_INDICES`](super::BLOCK_TYPE_TO_TEXTURE_INDICES).
///
/// The order is: [ABOVE, BELOW, WEST, EAST, NORTH, SOUTH]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    ABOVE = 0,

    /// The bottom face (facing negative Y)
    BELOW = 1,

    /// The west face (facing negative X)
    WEST = 2,

    /// The east face (facing positive X)
    EAST = 3,

    /// The north face (facing positive Z)
    NORTH = 4,

    /// The south face (facing negative Z)
    SOUTH = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// The order is: [ABOVE, BELOW, WEST, EAST, NORTH, SOUTH]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::ABOVE,
            BlockSide::BELOW,
            BlockSide::WEST,
            BlockSide::EAST,
            BlockSide::NORTH,
            BlockSide::SOUTH,
        ]
    }

    /// The offset from a cell to its neighbour across this face.
    pub fn delta(&self) -> Vector3<i32> {
        match self {
            BlockSide::ABOVE => Vector3::new(0, 1, 0),
            BlockSide::BELOW => Vector3::new(0, -1, 0),
            BlockSide::WEST => Vector3::new(-1, 0, 0),
            BlockSide::EAST => Vector3::new(1, 0, 0),
            BlockSide::NORTH => Vector3::new(0, 0, 1),
            BlockSide::SOUTH => Vector3::new(0, 0, -1),
        }
    }

    /// The outward unit normal of this face.
    pub fn normal(&self) -> Vector3<f32> {
        let d = self.delta();
        Vector3::new(d.x as f32, d.y as f32, d.z as f32)
    }

    /// The face on the other side of the cube.
    pub fn opposite(&self) -> BlockSide {
        match self {
            BlockSide::ABOVE => BlockSide::BELOW,
            BlockSide::BELOW => BlockSide::ABOVE,
            BlockSide::WEST => BlockSide::EAST,
            BlockSide::EAST => BlockSide::WEST,
            BlockSide::NORTH => BlockSide::SOUTH,
            BlockSide::SOUTH => BlockSide::NORTH,
        }
    }
}
