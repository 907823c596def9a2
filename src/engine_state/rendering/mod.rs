//! Rendering system for the voxel engine.
//!
//! This module contains everything between the chunk grid and the GPU: the face-culling
//! mesher with its dirty-flag cache, the interleaved vertex format, the upload of one
//! chunk mesh into WebGPU buffers and the registry of decoded block textures.

pub mod meshing;
pub mod texture;
pub mod upload;
mod vertex;

// Re-export commonly used types
pub use vertex::Vertex;
