//! # Chunk Module
//!
//! This module provides the `Chunk` struct: one fixed-size, dense 3D grid of block
//! cells with bounds-checked access and a dirty flag that tells the mesher whether
//! its cached geometry is stale.
//!
//! ## Storage
//!
//! Cells live in one flat, contiguous vector indexed `((x * height) + y) * depth + z`,
//! so walking the buffer front to back visits x in the outer loop, y in the middle
//! and z innermost. That is the same order the mesher emits geometry in.
//!
//! ## Coordinates
//!
//! Public accessors take signed `Point3<i32>` coordinates so that neighbour lookups
//! one step outside the chunk can be expressed and rejected by
//! [`Chunk::verify_coordinate`] instead of wrapping around.

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use crate::error::VoxelError;

use super::block::block_side::BlockSide;
use super::block::block_type::BlockType;

mod chunk_creation;
pub mod chunk_iteration;
pub mod visibility;

pub use chunk_creation::ChunkGenerator;
pub use visibility::{sides_exposed_to_air, EdgePolicy};

/// Default chunk width (X) in blocks.
pub const CHUNK_WIDTH: usize = 16;
/// Default chunk height (Y) in blocks.
pub const CHUNK_HEIGHT: usize = 128;
/// Default chunk depth (Z) in blocks.
pub const CHUNK_DEPTH: usize = 16;

/// The size of a chunk along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkDimensions {
    /// Number of cells along X.
    pub width: usize,
    /// Number of cells along Y.
    pub height: usize,
    /// Number of cells along Z.
    pub depth: usize,
}

impl ChunkDimensions {
    /// Creates a new set of dimensions.
    pub const fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.width * self.height * self.depth
    }
}

impl Default for ChunkDimensions {
    fn default() -> Self {
        Self::new(CHUNK_WIDTH, CHUNK_HEIGHT, CHUNK_DEPTH)
    }
}

/// A dense block grid for one chunk.
///
/// Chunks start filled with air and dirty, so the first meshing pass always runs.
/// Every successful mutation raises the dirty flag; only the mesher lowers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    dimensions: ChunkDimensions,
    blocks: Vec<BlockType>,
    dirty: bool,
}

impl Chunk {
    /// Creates a new chunk of the given size with every cell set to air.
    ///
    /// # Panics
    /// Panics if any dimension is zero.
    pub fn new(dimensions: ChunkDimensions) -> Self {
        assert!(
            dimensions.width > 0 && dimensions.height > 0 && dimensions.depth > 0,
            "chunk dimensions must be positive, got {:?}",
            dimensions
        );

        Chunk {
            dimensions,
            blocks: vec![BlockType::AIR; dimensions.volume()],
            dirty: true,
        }
    }

    /// The size of this chunk.
    pub fn dimensions(&self) -> ChunkDimensions {
        self.dimensions
    }

    /// Number of cells along X.
    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    /// Number of cells along Y.
    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    /// Number of cells along Z.
    pub fn depth(&self) -> usize {
        self.dimensions.depth
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.dimensions.height + y) * self.dimensions.depth + z
    }

    /// Returns `false` if a coordinate is out of the bounds of the chunk.
    pub fn verify_coordinate(&self, coordinate: Point3<i32>) -> bool {
        let in_range = |v: i32, len: usize| v >= 0 && (v as usize) < len;

        in_range(coordinate.x, self.dimensions.width)
            && in_range(coordinate.y, self.dimensions.height)
            && in_range(coordinate.z, self.dimensions.depth)
    }

    /// Writes `block_type` into the cell at `coordinate` and raises the dirty flag.
    ///
    /// # Errors
    /// [`VoxelError::OutOfBounds`] if the coordinate is outside the chunk. The chunk
    /// and its dirty flag are left untouched in that case.
    pub fn set_block(
        &mut self,
        coordinate: Point3<i32>,
        block_type: BlockType,
    ) -> Result<(), VoxelError> {
        if !self.verify_coordinate(coordinate) {
            return Err(self.out_of_bounds(coordinate));
        }

        let index = self.index(
            coordinate.x as usize,
            coordinate.y as usize,
            coordinate.z as usize,
        );
        self.blocks[index] = block_type;
        self.dirty = true;
        Ok(())
    }

    /// Returns the block at `coordinate`.
    ///
    /// # Errors
    /// [`VoxelError::OutOfBounds`] if the coordinate is outside the chunk.
    pub fn get_block(&self, coordinate: Point3<i32>) -> Result<BlockType, VoxelError> {
        if !self.verify_coordinate(coordinate) {
            return Err(self.out_of_bounds(coordinate));
        }

        Ok(self.block_at(
            coordinate.x as usize,
            coordinate.y as usize,
            coordinate.z as usize,
        ))
    }

    /// Returns the block at an in-bounds cell.
    ///
    /// # Panics
    /// Panics if the cell is outside the chunk.
    #[inline]
    pub fn block_at(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.blocks[self.index(x, y, z)]
    }

    /// Checks if the block at the specified in-bounds cell is solid.
    #[inline]
    pub fn is_block_solid(&self, x: usize, y: usize, z: usize) -> bool {
        self.block_at(x, y, z).is_solid()
    }

    /// Fills every column with `block_type` for `0 <= y < y_stop`, bottom to top.
    ///
    /// `y_stop` larger than the chunk height fills the whole chunk. Always raises the
    /// dirty flag.
    pub fn fill_up_to_y(&mut self, y_stop: usize, block_type: BlockType) {
        let y_stop = y_stop.min(self.dimensions.height);

        for x in 0..self.dimensions.width {
            for y in 0..y_stop {
                let start = self.index(x, y, 0);
                self.blocks[start..start + self.dimensions.depth].fill(block_type);
            }
        }

        self.dirty = true;
    }

    /// Determines which faces of an in-bounds cell border a non-solid neighbour.
    ///
    /// Out-of-chunk neighbours are resolved through `edge_policy`. The returned array
    /// is indexed by [`BlockSide`].
    pub(crate) fn generate_adjacent_blocks(
        &self,
        x: usize,
        y: usize,
        z: usize,
        edge_policy: EdgePolicy,
    ) -> [bool; 6] {
        let origin = Point3::new(x as i32, y as i32, z as i32);
        let mut exposed = [false; 6];

        for side in BlockSide::all() {
            let neighbour = origin + side.delta();
            exposed[side as usize] = if self.verify_coordinate(neighbour) {
                !self.is_block_solid(
                    neighbour.x as usize,
                    neighbour.y as usize,
                    neighbour.z as usize,
                )
            } else {
                edge_policy == EdgePolicy::Expose
            };
        }

        exposed
    }

    /// Whether the chunk changed since the last mesh was produced.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces the next meshing pass to rebuild.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Lowers the dirty flag once a mesh reflecting the current state exists.
    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Number of non-air cells.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    /// Whether every cell is air.
    pub fn is_empty(&self) -> bool {
        !self.blocks.iter().any(|b| b.is_solid())
    }

    fn out_of_bounds(&self, coordinate: Point3<i32>) -> VoxelError {
        VoxelError::OutOfBounds {
            x: coordinate.x,
            y: coordinate.y,
            z: coordinate.z,
            width: self.dimensions.width,
            height: self.dimensions.height,
            depth: self.dimensions.depth,
        }
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new(ChunkDimensions::default())
    }
}
