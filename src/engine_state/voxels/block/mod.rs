//! # Block Module
//!
//! This module provides the block-related definitions for the voxel engine:
//! block type codes, block faces, and the per-face texture slot table.

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Maps each block type to its texture slot for each face.
///
/// The outer array is indexed by `BlockType` as a `usize`.
/// The inner array holds one slot per face in the order:
/// [Above, Below, West, East, North, South]
pub static BLOCK_TYPE_TO_TEXTURE_INDICES: [[u32; 6]; 5] = [
    [0, 0, 0, 0, 0, 0], // AIR (never emitted)
    [1, 1, 1, 1, 1, 1], // DIRT
    [3, 1, 2, 2, 2, 2], // GRASS (top: 3, bottom: 1, sides: 2)
    [4, 4, 4, 4, 4, 4], // STONE
    [5, 5, 5, 5, 5, 5], // WOOD
];
