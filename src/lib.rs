#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Cube World
//!
//! A single-chunk voxel world and its face-culling mesher, built for WGPU.
//!
//! A fixed-size grid of blocks is turned into one flat triangle mesh containing only the
//! faces that border air. The mesh is cached behind a dirty flag so it is only rebuilt
//! after the grid changes, and a free-flying camera supplies the view-projection matrix
//! the mesh is drawn with.
//!
//! ## Key Modules
//!
//! * `application_state` - Input collection and frame pacing
//! * `config` - JSON configuration with defaults for every field
//! * `engine_state` - The chunk, the mesher, the camera and the render boundary
//! * `error` - Error types for grid access, configuration and textures
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     if cube_world::run(None).is_err() {
//!         std::process::exit(1);
//!     }
//! }
//! ```

use std::path::Path;

use cgmath::Point3;
use log::{debug, error, info};
use winit::{event::ElementState, keyboard::KeyCode};

use application_state::ApplicationState;
use config::EngineConfig;
use engine_state::{voxels::block::block_type::BlockType, EngineState};
use error::ConfigError;

pub mod application_state;
pub mod config;
pub mod engine_state;
pub mod error;

/// Environment variable naming a config file when none is passed on the command line.
pub const CONFIG_ENV_VAR: &str = "CUBE_WORLD_CONFIG";

/// Number of frames the headless driver simulates.
const DEMO_FRAMES: usize = 4;

/// Cells the demo carves out of the top layer after the first frame.
const DEMO_CARVED_CELLS: [[i32; 3]; 2] = [[5, 14, 8], [5, 14, 9]];

/// Runs the engine headless for a few frames and logs what it meshed.
///
/// Initializes `env_logger` from `RUST_LOG`, loads the config at `config_path` (or the
/// defaults), carves two cells out of the generated chunk and walks the camera forward
/// while logging mesh statistics.
///
/// # Errors
/// Any [`ConfigError`] raised while loading the config file or rejected by
/// [`EngineConfig::validate`].
pub fn run(config_path: Option<&Path>) -> Result<(), ConfigError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();
    info!("Logger initialized");

    let config = match config_path {
        Some(path) => EngineConfig::from_path(path).inspect_err(|e| error!("{}", e))?,
        None => EngineConfig::default(),
    };

    let engine_state = EngineState::new(&config).inspect_err(|e| error!("{}", e))?;
    let mut application = ApplicationState::new(engine_state);
    application
        .input_manager
        .intake_key(KeyCode::KeyW, ElementState::Pressed);

    for frame in 0..DEMO_FRAMES {
        if frame == 1 {
            for [x, y, z] in DEMO_CARVED_CELLS {
                let coordinate = Point3::new(x, y, z);
                // Cells outside a smaller configured chunk are skipped
                if let Err(e) = application.engine_state.set_block(coordinate, BlockType::AIR) {
                    debug!("Demo carve at {:?} skipped: {}", coordinate, e);
                }
            }
        }

        let (frame_data, frame_time) = application.advance_frame();
        info!(
            "Frame {}: {} faces, {} indices, rebuilt: {}, camera moved: {} ({:?} since last frame)",
            frame,
            frame_data.mesh.face_count(),
            frame_data.mesh.index_count(),
            frame_data.mesh_rebuilt,
            frame_data.camera_moved,
            frame_time
        );
    }

    let stats = application.engine_state.mesh_stats();
    info!(
        "Last mesh: {} solid blocks, {} faces drawn, {} faces culled, built in {:?}",
        stats.solid_blocks, stats.face_count, stats.culled_faces, stats.build_time
    );

    Ok(())
}
