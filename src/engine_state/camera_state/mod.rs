//! # Camera State Management
//!
//! This module handles all camera-related functionality including:
//! - Camera position and orientation tracking
//! - View and projection matrix calculations
//! - Player input processing for camera control
//!
//! ## Core Components
//! - `Camera`: Position, orientation and the cached view-projection matrix
//! - `CameraController`: Collects player intents between updates
//! - `Projection`: Manages the camera's projection matrix
//! - `CameraUniform`: GPU representation of camera data for shaders

use camera::{Camera, CameraController, CameraUniform, Projection};
use cgmath::{Matrix4, Point3, Rad};

use crate::config::{CameraConfig, ViewportConfig};

use super::PlayerAction;

pub mod camera;

/// Manages the complete camera system including state, controls, and GPU data.
#[derive(Debug)]
pub struct CameraState {
    /// The current camera position and orientation
    pub camera: Camera,
    /// Perspective settings for the current viewport
    pub projection: Projection,
    /// Handles player input and camera movement
    pub camera_controller: CameraController,
    /// GPU-optimized camera data for shaders
    pub camera_uniform: CameraUniform,
}

impl CameraState {
    /// Creates the camera described by `config` and computes its first
    /// view-projection for `viewport`.
    pub fn new(config: &CameraConfig, viewport: &ViewportConfig) -> Self {
        let [x, y, z] = config.position;
        let camera = Camera::new(
            Point3::new(x, y, z),
            Rad(config.yaw),
            Rad(config.pitch),
            config.move_speed,
            config.sensitivity,
        )
        .with_pitch_margin(config.pitch_margin);
        let projection = Projection::new(
            viewport.width,
            viewport.height,
            Rad(config.fov_y),
            config.z_near,
            config.z_far,
        );

        let mut camera_state = CameraState {
            camera,
            projection,
            camera_controller: CameraController::new(),
            camera_uniform: CameraUniform::new(),
        };
        camera_state.refresh();
        camera_state
    }

    /// Processes player input actions and updates the camera controller state.
    pub fn intake_actions(&mut self, actions: &PlayerAction) {
        self.camera_controller.intake_actions(actions);
    }

    /// Applies pending intents and recomputes the view-projection matrix.
    ///
    /// # Returns
    /// `true` if the camera moved or rotated.
    pub fn update(&mut self) -> bool {
        let has_updates = self.camera_controller.has_updates();
        if has_updates {
            self.camera_controller.apply_and_reset(&mut self.camera);
        }

        self.refresh();
        has_updates
    }

    /// Updates the aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
        self.refresh();
    }

    /// The cached view-projection matrix.
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.camera.view_projection()
    }

    fn refresh(&mut self) {
        self.camera.recompute_view_projection(&self.projection);
        self.camera_uniform.update_view_proj_and_pos(&self.camera);
    }
}
