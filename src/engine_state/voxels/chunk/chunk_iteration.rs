//! # Chunk Iteration Module
//!
//! This module provides an iterator over the non-air cells of a chunk.
//!
//! The chunk's flat storage is already laid out x-outer, y-middle, z-inner, so the
//! iterator walks the buffer front to back and decodes each flat offset back into a
//! cell position, skipping air as it goes.

use cgmath::Point3;

use crate::engine_state::voxels::block::block_type::BlockType;

use super::Chunk;

/// An iterator over all non-air blocks in a chunk, yielding each cell position with
/// its block type.
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next flat offset to inspect
    current_offset: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned before the first cell.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            current_offset: 0,
        }
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<usize>, BlockType);

    fn next(&mut self) -> Option<Self::Item> {
        let dimensions = self.chunk_ref.dimensions();
        let plane = dimensions.height * dimensions.depth;

        while self.current_offset < self.chunk_ref.blocks.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let block = self.chunk_ref.blocks[offset];
            if !block.is_solid() {
                continue;
            }

            let x = offset / plane;
            let y = (offset % plane) / dimensions.depth;
            let z = offset % dimensions.depth;
            return Some((Point3::new(x, y, z), block));
        }

        None
    }
}

impl Chunk {
    /// Iterates over every non-air cell in x-outer, y-middle, z-inner order.
    pub fn solid_blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }
}
