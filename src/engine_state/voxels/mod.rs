//! # Voxel Data
//!
//! This module contains the voxel data model: block type codes and faces, and the
//! chunk that stores one dense grid of them.
//!
//! ## Architecture
//!
//! * **Block**: block type codes, the six faces and per-face texture slots
//! * **Chunk**: a fixed-size 3D array of blocks with bounds checking, a dirty flag,
//!   face visibility queries and preset generators
//!
//! ## Data Flow
//!
//! 1. Edits (`set_block`, `fill_up_to_y`) write into the chunk and raise its dirty flag
//! 2. The mesher sees the dirty flag and asks the chunk which faces of each solid cell
//!    border air
//! 3. Once a mesh is built the flag is lowered until the next edit

pub mod block;
pub mod chunk;
