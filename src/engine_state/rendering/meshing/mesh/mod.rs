//! Mesh generation for voxel rendering.
//!
//! This module converts chunk data into GPU-friendly triangle meshes.
//!
//! # Architecture
//! - [`MeshData`]: Flat positions, indices and per-vertex attributes of one chunk
//! - [`face`]: Unit-cube reference geometry and per-face templates
//! - [`build_mesh`]: Face-culled meshing, emitting only faces that border air
//! - [`build_unculled_mesh`]: Full cube per block, the baseline culling is measured against
//!
//! # Usage
//! ```no_run
//! use cube_world::engine_state::rendering::meshing::{build_mesh, GeometryStrategy};
//! use cube_world::engine_state::voxels::block::block_type::BlockType;
//! use cube_world::engine_state::voxels::chunk::{Chunk, ChunkDimensions, EdgePolicy};
//!
//! let chunk = Chunk::flat(ChunkDimensions::default(), 15, BlockType::DIRT);
//! let mesh = build_mesh(&chunk, GeometryStrategy::PerFace, EdgePolicy::Expose);
//! assert_eq!(mesh.index_count() % 3, 0);
//! ```

mod culled;
pub mod face;
mod mesh;

pub use culled::{build_mesh, build_unculled_mesh};
pub use mesh::*;
