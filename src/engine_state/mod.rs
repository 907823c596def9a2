//! # Engine State Module
//!
//! The core engine module that owns the voxel chunk, its mesher and the camera, and
//! advances them once per frame.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the engine
//! * `camera_state` - Handles camera positioning and movement
//! * `rendering` - Meshing, GPU vertex format and upload, texture registry
//! * `voxels` - Block types, faces and the chunk grid
//!
//! ## Frame Flow
//!
//! Input is translated into a [`PlayerAction`]. [`EngineState::update`] feeds that to
//! the camera, recomputes the view-projection matrix, re-meshes the chunk if an edit
//! made it dirty and hands the renderer a [`FrameData`] for exactly one draw call.

use camera_state::CameraState;
use cgmath::{Matrix4, Point3};
use log::{info, warn};
use rendering::meshing::{ChunkMesher, MeshData, MeshStats};
use voxels::{block::block_type::BlockType, chunk::Chunk};
use winit::{event::MouseButton, keyboard::KeyCode};

use crate::{
    application_state::input_state::ProcessedInputState,
    config::EngineConfig,
    error::{ConfigError, VoxelError},
};

pub mod camera_state;
pub mod rendering;
pub mod voxels;

/// The main state container for the voxel engine.
///
/// # Examples
///
/// ```
/// use cube_world::config::EngineConfig;
/// use cube_world::engine_state::{EngineState, PlayerAction};
///
/// let mut engine_state = EngineState::new(&EngineConfig::default()).unwrap();
/// let frame = engine_state.update(&PlayerAction::default());
/// assert!(frame.mesh_rebuilt);
/// assert!(frame.mesh.index_count() > 0);
/// ```
#[derive(Debug)]
pub struct EngineState {
    /// Camera state managing position, orientation and movement
    pub camera_state: CameraState,
    /// The chunk and its cached mesh
    mesher: ChunkMesher,
}

/// Everything the renderer needs for one frame.
#[derive(Debug)]
pub struct FrameData<'a> {
    /// The mesh reflecting the current chunk contents
    pub mesh: &'a MeshData,
    /// Whether the mesh changed since the previous frame and must be re-uploaded
    pub mesh_rebuilt: bool,
    /// Whether the camera moved or rotated this frame
    pub camera_moved: bool,
    pub view_projection: Matrix4<f32>,
}

impl EngineState {
    /// Creates a new engine state with all subsystems initialized from `config`.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] if [`EngineConfig::validate`] rejects `config`.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let chunk_config = &config.chunk;
        let chunk = chunk_config.generator.generate(
            chunk_config.dimensions(),
            chunk_config.fill_height,
            chunk_config.fill_block,
            chunk_config.seed,
        );
        info!(
            "Generated {:?} chunk {}x{}x{} with {} solid blocks",
            chunk_config.generator,
            chunk.width(),
            chunk.height(),
            chunk.depth(),
            chunk.solid_count()
        );

        let mesher = ChunkMesher::new(chunk, config.meshing.strategy, chunk_config.edge_policy);
        let camera_state = CameraState::new(&config.camera, &config.viewport);

        Ok(Self {
            camera_state,
            mesher,
        })
    }

    /// Advances one frame.
    ///
    /// Applies the camera intents in `actions`, recomputes the view-projection and
    /// rebuilds the mesh only if the chunk changed since the last frame.
    pub fn update(&mut self, actions: &PlayerAction) -> FrameData<'_> {
        self.camera_state.intake_actions(actions);
        let camera_moved = self.camera_state.update();
        let view_projection = self.camera_state.view_projection();

        let mesh_rebuilt = self.mesher.update();

        FrameData {
            mesh: self.mesher.generate_mesh_data(),
            mesh_rebuilt,
            camera_moved,
            view_projection,
        }
    }

    /// Writes a block into the chunk.
    ///
    /// # Errors
    /// [`VoxelError::OutOfBounds`] if the coordinate is outside the chunk; the chunk
    /// and its mesh are left untouched.
    pub fn set_block(
        &mut self,
        coordinate: Point3<i32>,
        block_type: BlockType,
    ) -> Result<(), VoxelError> {
        self.mesher
            .set_block(coordinate, block_type)
            .inspect_err(|e| warn!("Ignoring block edit: {}", e))
    }

    /// Fills the chunk with `block_type` below `y_stop`.
    pub fn fill_up_to_y(&mut self, y_stop: usize, block_type: BlockType) {
        self.mesher.fill_up_to_y(y_stop, block_type);
    }

    /// Resizes the viewport the camera projects onto.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera_state.resize(width, height);
    }

    pub fn chunk(&self) -> &Chunk {
        self.mesher.chunk()
    }

    pub fn mesher(&self) -> &ChunkMesher {
        &self.mesher
    }

    pub fn mesher_mut(&mut self) -> &mut ChunkMesher {
        &mut self.mesher
    }

    /// Statistics of the most recent mesh build.
    pub fn mesh_stats(&self) -> MeshStats {
        self.mesher.stats()
    }

    /// Translates the processed input state into player actions.
    ///
    /// W/S move forward and back, A/D strafe, Q/E rise and sink. Mouse motion rotates
    /// the view only while the left button is down. Escape requests exit on press.
    pub fn translate_processed_input(input: &ProcessedInputState) -> PlayerAction {
        let mut player_action = PlayerAction {
            move_forward: input.get_key_state(KeyCode::KeyW).is_active(),
            move_backward: input.get_key_state(KeyCode::KeyS).is_active(),
            move_left: input.get_key_state(KeyCode::KeyA).is_active(),
            move_right: input.get_key_state(KeyCode::KeyD).is_active(),
            move_up: input.get_key_state(KeyCode::KeyQ).is_active(),
            move_down: input.get_key_state(KeyCode::KeyE).is_active(),
            rotate_view: None,
            exit_requested: input.get_key_state(KeyCode::Escape).is_just_pressed(),
        };

        if input.get_mouse_button_state(MouseButton::Left).is_active() {
            player_action.rotate_view = input.get_mouse_delta();
        }

        player_action
    }
}

/// Player intents for one frame, derived from input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerAction {
    /// Movement actions - true if key is pressed or held
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,

    /// Mouse delta to rotate the view by
    pub rotate_view: Option<(f64, f64)>,

    /// Escape was pressed this frame
    pub exit_requested: bool,
}
