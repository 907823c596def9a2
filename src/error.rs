//! # Error Types
//!
//! All errors that can surface from the voxel core, the configuration layer and the
//! texture boundary. Meshing itself never fails; only grid access, config loading and
//! texture loading do.

use thiserror::Error;

/// Errors raised by grid access and visibility queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoxelError {
    /// A coordinate failed the chunk bounds check.
    #[error("coordinate ({x}, {y}, {z}) is outside the {width}x{height}x{depth} chunk")]
    OutOfBounds {
        /// X component of the rejected coordinate.
        x: i32,
        /// Y component of the rejected coordinate.
        y: i32,
        /// Z component of the rejected coordinate.
        z: i32,
        /// Chunk width.
        width: usize,
        /// Chunk height.
        height: usize,
        /// Chunk depth.
        depth: usize,
    },

    /// A precondition on the input was violated, e.g. asking for the exposed sides of air.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while loading or validating an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config parsed but holds values the engine cannot run with.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors raised by the [`TextureRegistry`](crate::engine_state::rendering::texture::TextureRegistry).
#[derive(Error, Debug)]
pub enum TextureError {
    /// The image file could not be read.
    #[error("failed to read texture: {0}")]
    Io(#[from] std::io::Error),

    /// The image bytes could not be decoded.
    #[error("failed to decode texture: {0}")]
    Decode(#[from] image::ImageError),

    /// No texture has been registered under this name.
    #[error("no texture registered under '{0}'")]
    UnknownTexture(String),

    /// A texture with this name has already been loaded.
    #[error("texture '{0}' is already registered")]
    DuplicateTexture(String),
}
