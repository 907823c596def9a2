//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world and the
//! conversion between the enum and the compact code stored in a chunk.

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::{BlockTypeSize, BLOCK_TYPE_TO_TEXTURE_INDICES};

/// Enumerates all possible block types in the voxel world.
///
/// Code `0` is reserved for [`BlockType::AIR`]. Every other variant is an opaque,
/// full cube as far as visibility is concerned; the variant only selects color and
/// texture slots.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// An air block, which is empty and never produces geometry.
    #[default]
    AIR = 0,

    /// A basic dirt block.
    DIRT = 1,

    /// A grass block with a different texture on top and bottom.
    GRASS = 2,

    /// A stone block.
    STONE = 3,

    /// A wooden block with a bark texture on all sides.
    WOOD = 4,
}

impl BlockType {
    /// Decodes a stored block code.
    ///
    /// # Returns
    /// `None` if the code does not name a known block type.
    pub fn from_code(code: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(code)
    }

    /// The compact code stored in a chunk for this type.
    pub fn code(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Whether this block produces geometry.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }

    /// Texture slots for each face, indexed by [`BlockSide`](super::block_side::BlockSide).
    pub fn texture_indices(self) -> [u32; 6] {
        BLOCK_TYPE_TO_TEXTURE_INDICES[self as usize]
    }

    /// Base tint used when no texture system is active.
    pub fn color(self) -> [f32; 3] {
        match self {
            BlockType::AIR => [0.0, 0.0, 0.0],
            BlockType::DIRT => [0.45, 0.30, 0.16],
            BlockType::GRASS => [0.30, 0.62, 0.22],
            BlockType::STONE => [0.50, 0.50, 0.52],
            BlockType::WOOD => [0.55, 0.40, 0.22],
        }
    }
}
