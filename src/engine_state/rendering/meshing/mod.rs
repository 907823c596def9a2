//! Mesh generation and caching for voxel rendering.
//!
//! This module turns one chunk into one flat triangle mesh, and re-runs that work
//! only when the chunk has changed since the last mesh was produced.
//!
//! # Architecture
//! - [`ChunkMesher`]: Owns the chunk, the cached mesh and the last build's statistics
//! - `mesh/`: Reference cube geometry, the mesh buffers and the face-culling builder
//!
//! # Dirty Tracking
//! Every edit that goes through the chunk raises its dirty flag. When the flag is
//! down, [`ChunkMesher::generate_mesh_data`] hands back the cached mesh without
//! touching the grid; when it is up, the whole chunk is re-meshed and the flag is
//! lowered.

use cgmath::Point3;
use log::{debug, trace};
use web_time::{Duration, Instant};

use crate::engine_state::voxels::{
    block::block_type::BlockType,
    chunk::{Chunk, EdgePolicy},
};
use crate::error::VoxelError;

pub mod mesh;

// Re-export the mesh module's public interface for external use
pub use mesh::*;

/// Figures describing the most recent mesh build.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeshStats {
    /// Solid cells in the chunk at build time.
    pub solid_blocks: usize,
    /// Faces emitted.
    pub face_count: u32,
    /// Faces suppressed because they touch another solid cell.
    pub culled_faces: u32,
    /// Vertices emitted.
    pub vertex_count: u32,
    /// Indices emitted.
    pub index_count: u32,
    /// Wall-clock time the build took.
    pub build_time: Duration,
}

/// Builds and caches the mesh of a single chunk.
///
/// The mesher exclusively owns its chunk. Edits go through [`ChunkMesher::chunk_mut`]
/// or the forwarding helpers so the dirty flag always reflects them.
#[derive(Debug, Clone)]
pub struct ChunkMesher {
    chunk: Chunk,
    strategy: GeometryStrategy,
    edge_policy: EdgePolicy,
    cached_mesh: Option<MeshData>,
    stats: MeshStats,
}

impl ChunkMesher {
    /// Creates a mesher for `chunk`. Nothing is built until the first request.
    pub fn new(chunk: Chunk, strategy: GeometryStrategy, edge_policy: EdgePolicy) -> Self {
        ChunkMesher {
            chunk,
            strategy,
            edge_policy,
            cached_mesh: None,
            stats: MeshStats::default(),
        }
    }

    /// The chunk being meshed.
    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    /// Mutable access to the chunk. Writes through it raise the dirty flag.
    pub fn chunk_mut(&mut self) -> &mut Chunk {
        &mut self.chunk
    }

    /// Writes a block into the owned chunk.
    ///
    /// # Errors
    /// [`VoxelError::OutOfBounds`] if the coordinate is outside the chunk.
    pub fn set_block(
        &mut self,
        coordinate: Point3<i32>,
        block_type: BlockType,
    ) -> Result<(), VoxelError> {
        self.chunk.set_block(coordinate, block_type)
    }

    /// Fills the owned chunk up to `y_stop`. See [`Chunk::fill_up_to_y`].
    pub fn fill_up_to_y(&mut self, y_stop: usize, block_type: BlockType) {
        self.chunk.fill_up_to_y(y_stop, block_type);
    }

    /// The geometry layout in use.
    pub fn strategy(&self) -> GeometryStrategy {
        self.strategy
    }

    /// Switches the geometry layout. The next request rebuilds the mesh.
    pub fn set_strategy(&mut self, strategy: GeometryStrategy) {
        if self.strategy != strategy {
            self.strategy = strategy;
            self.chunk.mark_dirty();
        }
    }

    /// The chunk edge policy in use.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Switches the chunk edge policy. The next request rebuilds the mesh.
    pub fn set_edge_policy(&mut self, edge_policy: EdgePolicy) {
        if self.edge_policy != edge_policy {
            self.edge_policy = edge_policy;
            self.chunk.mark_dirty();
        }
    }

    /// Whether the next request will rebuild the mesh.
    pub fn needs_rebuild(&self) -> bool {
        self.chunk.is_dirty() || self.cached_mesh.is_none()
    }

    /// Rebuilds the cached mesh if the chunk changed since the last build.
    ///
    /// # Returns
    /// `true` if a new mesh was built.
    pub fn update(&mut self) -> bool {
        if !self.needs_rebuild() {
            trace!("Chunk unchanged, reusing cached mesh");
            return false;
        }

        let start = Instant::now();
        let mesh = build_mesh(&self.chunk, self.strategy, self.edge_policy);
        let build_time = start.elapsed();

        let solid_blocks = self.chunk.solid_count();
        let face_count = mesh.face_count();
        self.stats = MeshStats {
            solid_blocks,
            face_count,
            culled_faces: (solid_blocks as u32 * 6).saturating_sub(face_count),
            vertex_count: mesh.vertex_count(),
            index_count: mesh.index_count(),
            build_time,
        };

        debug!(
            "Meshed chunk: {} blocks, {} faces ({} culled), {} vertices, {} indices in {:?}",
            self.stats.solid_blocks,
            self.stats.face_count,
            self.stats.culled_faces,
            self.stats.vertex_count,
            self.stats.index_count,
            self.stats.build_time
        );

        self.cached_mesh = Some(mesh);
        self.chunk.mark_clean();
        true
    }

    /// Returns the mesh of the current chunk state, building it only if needed.
    pub fn generate_mesh_data(&mut self) -> &MeshData {
        self.update();
        self.cached_mesh
            .get_or_insert_with(|| MeshData::new(self.strategy))
    }

    /// The most recently built mesh, if any.
    pub fn cached_mesh(&self) -> Option<&MeshData> {
        self.cached_mesh.as_ref()
    }

    /// Statistics of the most recent build.
    pub fn stats(&self) -> MeshStats {
        self.stats
    }
}
