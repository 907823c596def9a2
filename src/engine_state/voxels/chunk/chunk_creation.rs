//! # Chunk Creation Module
//!
//! Preset generators that populate a fresh chunk: flat fills, one random fill height
//! per chunk, Perlin-noise heightmaps and a 3D checkerboard that maximises the number
//! of exposed faces. Every preset returns a dirty chunk.

use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::engine_state::voxels::block::block_type::BlockType;

use super::{Chunk, ChunkDimensions};

/// Scaling factor applied to column coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.05;
/// Lowest fill height the random presets produce.
pub const RANDOM_HEIGHT_MIN: usize = 5;
/// Highest fill height (exclusive) the random presets produce.
pub const RANDOM_HEIGHT_MAX: usize = 15;

/// The method used to populate a new chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkGenerator {
    /// Nothing but air.
    Empty,
    /// Every column filled up to the configured height.
    #[default]
    Flat,
    /// Every column filled up to one random height in `5..15`.
    RandomHeight,
    /// Per-column heights sampled from 2D Perlin noise.
    Perlin,
    /// Alternating solid and air cells in all three axes.
    Checkerboard,
}

impl ChunkGenerator {
    /// Builds a chunk with this generator.
    ///
    /// # Arguments
    /// * `dimensions` - Size of the new chunk
    /// * `fill_height` - Fill height for [`ChunkGenerator::Flat`]; an upper bound for
    ///   Perlin heights
    /// * `block_type` - The solid block to place
    /// * `seed` - Seed for the random and noise generators
    pub fn generate(
        &self,
        dimensions: ChunkDimensions,
        fill_height: usize,
        block_type: BlockType,
        seed: u64,
    ) -> Chunk {
        match self {
            ChunkGenerator::Empty => Chunk::new(dimensions),
            ChunkGenerator::Flat => Chunk::flat(dimensions, fill_height, block_type),
            ChunkGenerator::RandomHeight => Chunk::random_height(
                dimensions,
                RANDOM_HEIGHT_MIN,
                RANDOM_HEIGHT_MAX,
                block_type,
                seed,
            ),
            ChunkGenerator::Perlin => Chunk::perlin(dimensions, fill_height, block_type, seed),
            ChunkGenerator::Checkerboard => Chunk::checkerboard(dimensions, block_type),
        }
    }
}

impl Chunk {
    /// Creates a chunk whose bottom `fill_height` layers are `block_type`.
    pub fn flat(dimensions: ChunkDimensions, fill_height: usize, block_type: BlockType) -> Self {
        let mut chunk = Chunk::new(dimensions);
        chunk.fill_up_to_y(fill_height, block_type);
        chunk
    }

    /// Creates a chunk filled up to one random height in `min..max`.
    pub fn random_height(
        dimensions: ChunkDimensions,
        min: usize,
        max: usize,
        block_type: BlockType,
        seed: u64,
    ) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let height = if max > min { rng.usize(min..max) } else { min };
        Self::flat(dimensions, height, block_type)
    }

    /// Creates a chunk whose column heights follow 2D Perlin noise.
    ///
    /// Heights range over `1..=max_height` (clamped to the chunk height), so the
    /// bottom layer is always solid.
    pub fn perlin(
        dimensions: ChunkDimensions,
        max_height: usize,
        block_type: BlockType,
        seed: u64,
    ) -> Self {
        let perlin = Perlin::new(perlin_seed(seed));
        let max_height = max_height.clamp(1, dimensions.height);
        let mut chunk = Chunk::new(dimensions);

        for x in 0..dimensions.width {
            for z in 0..dimensions.depth {
                let sample = perlin.get([
                    x as f64 * PERLIN_SCALE_FACTOR + 0.5,
                    z as f64 * PERLIN_SCALE_FACTOR + 0.5,
                ]);
                // Perlin output lies in [-1, 1]
                let normalized = ((sample + 1.0) * 0.5).clamp(0.0, 1.0);
                let column_height = 1 + (normalized * (max_height - 1) as f64).round() as usize;

                for y in 0..column_height {
                    let index = chunk.index(x, y, z);
                    chunk.blocks[index] = block_type;
                }
            }
        }

        chunk
    }

    /// Creates a chunk with a 3D checkerboard pattern.
    ///
    /// No two solid cells share a face, so every face of every solid block is exposed.
    pub fn checkerboard(dimensions: ChunkDimensions, block_type: BlockType) -> Self {
        let mut chunk = Chunk::new(dimensions);

        for x in 0..dimensions.width {
            for y in 0..dimensions.height {
                for z in 0..dimensions.depth {
                    if (x + y + z) % 2 == 0 {
                        let index = chunk.index(x, y, z);
                        chunk.blocks[index] = block_type;
                    }
                }
            }
        }

        chunk
    }

    /// The height of the topmost solid cell in a column plus one, or zero for an
    /// all-air column.
    pub fn column_height(&self, x: usize, z: usize) -> usize {
        (0..self.height())
            .rev()
            .find(|&y| self.is_block_solid(x, y, z))
            .map_or(0, |y| y + 1)
    }
}

/// Folds a 64-bit seed into the 32 bits `Perlin` accepts, so the high half still
/// changes the terrain.
fn perlin_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::chunk::EdgePolicy;

    fn dims() -> ChunkDimensions {
        ChunkDimensions::new(8, 32, 8)
    }

    #[test]
    fn flat_fills_exact_layers() {
        let chunk = Chunk::flat(dims(), 4, BlockType::DIRT);
        assert_eq!(chunk.solid_count(), 8 * 4 * 8);
        assert!(chunk.is_dirty());
        assert_eq!(chunk.column_height(3, 3), 4);
    }

    #[test]
    fn random_height_stays_in_range_and_is_deterministic() {
        let a = Chunk::random_height(dims(), 5, 15, BlockType::DIRT, 42);
        let b = Chunk::random_height(dims(), 5, 15, BlockType::DIRT, 42);
        assert_eq!(a, b);

        let h = a.column_height(0, 0);
        assert!((5..15).contains(&h));
        for x in 0..8 {
            for z in 0..8 {
                assert_eq!(a.column_height(x, z), h);
            }
        }
    }

    #[test]
    fn perlin_columns_are_bounded() {
        let chunk = Chunk::perlin(dims(), 12, BlockType::GRASS, 3);
        for x in 0..8 {
            for z in 0..8 {
                let h = chunk.column_height(x, z);
                assert!((1..=12).contains(&h), "column ({x}, {z}) has height {h}");
            }
        }
    }

    #[test]
    fn perlin_seed_uses_all_64_bits() {
        assert_ne!(perlin_seed(0), perlin_seed(1 << 32));
        assert_eq!(perlin_seed(7), 7);

        let dimensions = ChunkDimensions::new(16, 64, 16);
        let low = Chunk::perlin(dimensions, 60, BlockType::DIRT, 0);
        let high = Chunk::perlin(dimensions, 60, BlockType::DIRT, 1 << 32);
        assert_ne!(low, high);
    }

    #[test]
    fn checkerboard_has_no_touching_cells() {
        let chunk = Chunk::checkerboard(ChunkDimensions::new(4, 4, 4), BlockType::STONE);
        assert_eq!(chunk.solid_count(), 32);
        for (p, _) in chunk.solid_blocks() {
            let exposed = chunk.generate_adjacent_blocks(p.x, p.y, p.z, EdgePolicy::Expose);
            assert_eq!(exposed, [true; 6]);
        }
    }

    #[test]
    fn empty_generator_leaves_air() {
        let chunk = ChunkGenerator::Empty.generate(dims(), 10, BlockType::DIRT, 0);
        assert!(chunk.is_empty());
    }
}
