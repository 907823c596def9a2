//! # Engine Configuration
//!
//! JSON configuration for the engine. Every section and field is optional; anything
//! missing falls back to the defaults below, which reproduce the classic demo world:
//! a 16x128x16 chunk of dirt filled up to `y = 15`, seen from above and in front.

use std::f32::consts::{FRAC_PI_2, PI};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::engine_state::rendering::meshing::GeometryStrategy;
use crate::engine_state::voxels::block::block_type::BlockType;
use crate::engine_state::voxels::chunk::{ChunkDimensions, ChunkGenerator, EdgePolicy};
use crate::error::ConfigError;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub chunk: ChunkConfig,
    pub meshing: MeshingConfig,
    pub camera: CameraConfig,
    pub viewport: ViewportConfig,
}

/// Size, edge handling and initial contents of the chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    pub edge_policy: EdgePolicy,
    pub generator: ChunkGenerator,
    /// Fill height for `flat`, maximum column height for `perlin`.
    pub fill_height: usize,
    pub fill_block: BlockType,
    pub seed: u64,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 128,
            depth: 16,
            edge_policy: EdgePolicy::Expose,
            generator: ChunkGenerator::Flat,
            fill_height: 15,
            fill_block: BlockType::DIRT,
            seed: 0,
        }
    }
}

impl ChunkConfig {
    pub fn dimensions(&self) -> ChunkDimensions {
        ChunkDimensions::new(self.width, self.height, self.depth)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshingConfig {
    pub strategy: GeometryStrategy,
}

/// Initial camera pose and camera tuning. Angles are in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub move_speed: f32,
    pub sensitivity: f32,
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub pitch_margin: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [8.0, 20.0, 30.0],
            yaw: PI,
            pitch: 0.0,
            move_speed: 0.1,
            sensitivity: 0.0025,
            fov_y: 1.3,
            z_near: 0.1,
            z_far: 100.0,
            pitch_margin: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::Invalid`] if
    /// [`EngineConfig::validate`] rejects the values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks that the values describe a world the engine can run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chunk = &self.chunk;
        if chunk.width == 0 || chunk.height == 0 || chunk.depth == 0 {
            return Err(invalid(format!(
                "chunk dimensions must be positive, got {}x{}x{}",
                chunk.width, chunk.height, chunk.depth
            )));
        }

        let camera = &self.camera;
        if !(camera.move_speed > 0.0) {
            return Err(invalid(format!(
                "camera.move_speed must be positive, got {}",
                camera.move_speed
            )));
        }
        if !(camera.sensitivity > 0.0) {
            return Err(invalid(format!(
                "camera.sensitivity must be positive, got {}",
                camera.sensitivity
            )));
        }
        if !(camera.z_near > 0.0 && camera.z_near < camera.z_far) {
            return Err(invalid(format!(
                "camera clip planes must satisfy 0 < z_near < z_far, got {} and {}",
                camera.z_near, camera.z_far
            )));
        }
        if !(camera.fov_y > 0.0 && camera.fov_y < PI) {
            return Err(invalid(format!(
                "camera.fov_y must lie in (0, pi), got {}",
                camera.fov_y
            )));
        }
        if !(camera.pitch_margin > 0.0 && camera.pitch_margin < FRAC_PI_2) {
            return Err(invalid(format!(
                "camera.pitch_margin must lie in (0, pi/2), got {}",
                camera.pitch_margin
            )));
        }

        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}
