//! # Camera Implementation
//!
//! This module contains the core camera implementation including:
//! - Camera representation and transformations
//! - Projection matrix handling
//! - Camera controller for input processing
//! - GPU uniform data
//!
//! ## Conventions
//! Yaw rotates around world up and pitch tilts toward it. With yaw and pitch both
//! zero the camera looks down `+Z`; the look direction is
//! `(sin yaw * cos pitch, sin pitch, cos yaw * cos pitch)`.

use cgmath::*;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::engine_state::PlayerAction;

/// Transformation matrix to convert from OpenGL's coordinate system to WGPU's.
///
/// This matrix performs two main transformations:
/// 1. Scales the Z coordinate from [-1, 1] to [-0.5, 0.5]
/// 2. Translates the Z coordinate from [-0.5, 0.5] to [0, 1]
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,  // Scale Z from [-1,1] to [-0.5,0.5]
    0.0, 0.0, 0.5, 1.0,  // Translate Z from [-0.5,0.5] to [0,1]
);

/// Default distance kept between the pitch and straight up or down.
pub const DEFAULT_PITCH_MARGIN: f32 = 0.1;
/// Smallest accepted pitch margin; looking exactly along the up axis breaks the view matrix.
pub const MIN_PITCH_MARGIN: f32 = 1e-3;

/// Represents a first-person camera in 3D space.
///
/// Movement ignores pitch: walking forward stays on the horizontal plane no matter
/// where the camera looks.
#[derive(Debug, Clone)]
pub struct Camera {
    /// The camera's position in world space
    pub position: Point3<f32>,
    /// Horizontal rotation (around Y axis), kept in [0, 2π)
    yaw: Rad<f32>,
    /// Vertical rotation, kept strictly inside ±π/2
    pitch: Rad<f32>,
    /// World units moved per `move_local` call
    move_speed: f32,
    /// Radians of rotation per unit of mouse delta
    sensitivity: f32,
    pitch_margin: f32,
    /// Product of the last recomputed projection and view matrices
    view_projection: Matrix4<f32>,
}

impl Camera {
    /// Creates a new camera with the specified position and orientation.
    ///
    /// The pitch is clamped like any later rotation. The cached view-projection
    /// starts as the identity until [`Camera::recompute_view_projection`] runs.
    ///
    /// # Example
    /// ```rust
    /// use cgmath::{Point3, Rad};
    /// use cube_world::engine_state::camera_state::camera::Camera;
    ///
    /// let camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Rad(0.0), Rad(0.0), 0.1, 0.0025);
    /// assert!((camera.look_direction().z - 1.0).abs() < 1e-6);
    /// ```
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
        move_speed: f32,
        sensitivity: f32,
    ) -> Self {
        let mut camera = Self {
            position: position.into(),
            yaw: Rad(yaw.into().0.rem_euclid(TAU)),
            pitch: Rad(0.0),
            move_speed,
            sensitivity,
            pitch_margin: DEFAULT_PITCH_MARGIN,
            view_projection: Matrix4::identity(),
        };
        camera.set_pitch(pitch.into());
        camera
    }

    /// Replaces the pitch margin and re-clamps the current pitch.
    ///
    /// The margin is kept within `[MIN_PITCH_MARGIN, π/2]`; NaN falls back to
    /// [`DEFAULT_PITCH_MARGIN`].
    pub fn with_pitch_margin(mut self, pitch_margin: f32) -> Self {
        self.pitch_margin = if pitch_margin.is_nan() {
            DEFAULT_PITCH_MARGIN
        } else {
            pitch_margin.clamp(MIN_PITCH_MARGIN, FRAC_PI_2)
        };
        self.set_pitch(self.pitch);
        self
    }

    pub fn yaw(&self) -> Rad<f32> {
        self.yaw
    }

    pub fn pitch(&self) -> Rad<f32> {
        self.pitch
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Largest pitch magnitude the camera accepts.
    pub fn pitch_limit(&self) -> f32 {
        FRAC_PI_2 - self.pitch_margin
    }

    fn set_pitch(&mut self, pitch: Rad<f32>) {
        let limit = self.pitch_limit();
        self.pitch = Rad(pitch.0.clamp(-limit, limit));
    }

    /// Unit vector the camera looks along.
    pub fn look_direction(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.0.sin_cos();
        Vector3::new(yaw_sin * pitch_cos, pitch_sin, yaw_cos * pitch_cos).normalize()
    }

    /// Unit vector pointing forward on the horizontal plane.
    pub fn forward(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        Vector3::new(yaw_sin, 0.0, yaw_cos)
    }

    /// Unit vector pointing to the camera's right on the horizontal plane.
    pub fn right(&self) -> Vector3<f32> {
        let forward = self.forward();
        Vector3::new(-forward.z, 0.0, forward.x)
    }

    /// Moves the camera by an offset given in local axes.
    ///
    /// `local.x` runs along [`Camera::right`], `local.y` along [`Camera::forward`] and
    /// `local.z` along world up. The combined direction is normalized and scaled by the
    /// move speed, so only the direction of `local` matters. A zero offset is a no-op.
    pub fn move_local(&mut self, local: Vector3<f32>) {
        let mut offset = self.right() * local.x + self.forward() * local.y;
        offset.y += local.z;

        if offset.magnitude2() <= f32::EPSILON {
            return;
        }

        self.position += offset.normalize() * self.move_speed;
    }

    /// Rotates the camera by a mouse delta scaled by the sensitivity.
    ///
    /// Yaw wraps into [0, 2π); pitch is clamped to the pitch limit.
    pub fn add_rotation(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw = Rad((self.yaw.0 + delta_x * self.sensitivity).rem_euclid(TAU));
        self.set_pitch(Rad(self.pitch.0 + delta_y * self.sensitivity));
    }

    /// Calculates the view matrix for this camera.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.look_direction(), Vector3::unit_y())
    }

    /// Rebuilds and caches the view-projection matrix.
    pub fn recompute_view_projection(&mut self, projection: &Projection) -> Matrix4<f32> {
        self.view_projection = projection.calc_matrix() * self.calc_matrix();
        self.view_projection
    }

    /// The matrix cached by the last [`Camera::recompute_view_projection`].
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.view_projection
    }
}

/// Represents a camera's projection matrix and related parameters.
#[derive(Debug, Clone)]
pub struct Projection {
    /// Aspect ratio (width / height)
    aspect: f32,
    /// Vertical field of view in radians
    fovy: Rad<f32>,
    /// Near clipping plane distance
    znear: f32,
    /// Far clipping plane distance
    zfar: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `width` - Viewport width in pixels
    /// * `height` - Viewport height in pixels
    /// * `fovy` - Vertical field of view (can be any type convertible to `Rad<f32>`)
    /// * `znear` - Near clipping plane distance
    /// * `zfar` - Far clipping plane distance
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: aspect_ratio(width, height),
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    /// Updates the projection's aspect ratio for viewport resizing.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Calculates the projection matrix.
    ///
    /// Combines the perspective projection with the OpenGL to WGPU coordinate system transform.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

// A minimized window reports a zero height
fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Collects movement and rotation intents between camera updates.
#[derive(Debug, Default)]
pub struct CameraController {
    // Local movement axes: right, forward, up
    amount_right: f32,
    amount_forward: f32,
    amount_up: f32,

    // Accumulated mouse delta
    rotate_horizontal: f32,
    rotate_vertical: f32,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes player actions and updates controller state accordingly.
    ///
    /// Opposite keys cancel out. Mouse deltas are negated because screen
    /// coordinates grow to the right and downward.
    pub fn intake_actions(&mut self, actions: &PlayerAction) {
        let axis = |positive: bool, negative: bool| positive as i32 as f32 - negative as i32 as f32;

        self.amount_right = axis(actions.move_right, actions.move_left);
        self.amount_forward = axis(actions.move_forward, actions.move_backward);
        self.amount_up = axis(actions.move_up, actions.move_down);

        if let Some((delta_x, delta_y)) = actions.rotate_view {
            self.rotate_horizontal -= delta_x as f32;
            self.rotate_vertical -= delta_y as f32;
        }
    }

    /// Checks if there are any pending updates that would affect the camera.
    pub fn has_updates(&self) -> bool {
        self.amount_right != 0.0
            || self.amount_forward != 0.0
            || self.amount_up != 0.0
            || self.rotate_horizontal != 0.0
            || self.rotate_vertical != 0.0
    }

    /// Applies the pending intents to `camera` and clears them.
    pub fn apply_and_reset(&mut self, camera: &mut Camera) {
        camera.move_local(Vector3::new(
            self.amount_right,
            self.amount_forward,
            self.amount_up,
        ));
        if self.rotate_horizontal != 0.0 || self.rotate_vertical != 0.0 {
            camera.add_rotation(self.rotate_horizontal, self.rotate_vertical);
        }

        *self = Self::default();
    }
}

/// GPU-friendly representation of camera data for shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    // cgmath types are not Pod, so the matrix is stored as a 4x4 f32 array
    view_proj: [[f32; 4]; 4],
    position: [f32; 4],
}

impl CameraUniform {
    /// Creates a new camera uniform with an identity matrix and zero position.
    pub fn new() -> Self {
        Self {
            view_proj: cgmath::Matrix4::identity().into(),
            position: [0.0, 0.0, 0.0, 0.0],
        }
    }

    /// Copies the camera's cached view-projection matrix and position.
    pub fn update_view_proj_and_pos(&mut self, camera: &Camera) {
        self.view_proj = camera.view_projection().into();
        let pos3: [f32; 3] = camera.position.into();

        self.position = [pos3[0], pos3[1], pos3[2], 1.0];
    }

    pub fn view_proj(&self) -> [[f32; 4]; 4] {
        self.view_proj
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-5;

    fn camera() -> Camera {
        Camera::new(Point3::new(0.0, 0.0, 0.0), Rad(PI), Rad(0.0), 0.1, 0.0025)
    }

    #[test]
    fn initial_yaw_looks_down_negative_z() {
        let dir = camera().look_direction();
        assert!((dir - Vector3::new(0.0, 0.0, -1.0)).magnitude() < EPSILON);
    }

    #[test]
    fn out_of_range_pitch_margin_is_clamped() {
        let camera = camera().with_pitch_margin(2.0);
        assert_eq!(camera.pitch_limit(), 0.0);
        assert_eq!(camera.pitch(), Rad(0.0));

        let mut camera = camera.with_pitch_margin(-1.0);
        assert!((camera.pitch_limit() - (FRAC_PI_2 - MIN_PITCH_MARGIN)).abs() < EPSILON);
        camera.add_rotation(0.0, 1.0e4);
        assert!(camera.pitch().0.is_finite());
        assert!(camera.pitch().0.abs() <= camera.pitch_limit());

        let camera = camera.with_pitch_margin(f32::NAN);
        assert!((camera.pitch_limit() - (FRAC_PI_2 - DEFAULT_PITCH_MARGIN)).abs() < EPSILON);
    }

    #[test]
    fn pitch_is_clamped_inside_the_poles() {
        let mut camera = camera();
        camera.add_rotation(0.0, 100_000.0);
        assert!((camera.pitch().0 - (FRAC_PI_2 - 0.1)).abs() < EPSILON);

        camera.add_rotation(0.0, -1_000_000.0);
        assert!((camera.pitch().0 + (FRAC_PI_2 - 0.1)).abs() < EPSILON);
        assert!(camera.look_direction().y < 0.0);
    }

    #[test]
    fn yaw_wraps_into_one_turn() {
        let mut camera = camera();
        // 2π / 0.0025 units of mouse travel is one full turn
        camera.add_rotation(3000.0, 0.0);
        assert!(camera.yaw().0 >= 0.0 && camera.yaw().0 < TAU);

        camera.add_rotation(-5000.0, 0.0);
        assert!(camera.yaw().0 >= 0.0 && camera.yaw().0 < TAU);
    }

    #[test]
    fn forward_movement_stays_horizontal() {
        let mut camera = camera();
        camera.add_rotation(0.0, 300.0);
        camera.move_local(Vector3::new(0.0, 1.0, 0.0));

        assert!(camera.position.y.abs() < EPSILON);
        assert!((camera.position.z + 0.1).abs() < EPSILON);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut camera = camera();
        camera.move_local(Vector3::new(1.0, 1.0, 1.0));
        let moved = camera.position - Point3::new(0.0, 0.0, 0.0);
        assert!((moved.magnitude() - 0.1).abs() < EPSILON);
    }

    #[test]
    fn right_is_perpendicular_to_forward() {
        let camera = camera();
        assert!(camera.right().dot(camera.forward()).abs() < EPSILON);
        assert!((camera.right() - Vector3::new(1.0, 0.0, 0.0)).magnitude() < EPSILON);
    }

    #[test]
    fn zero_offset_does_not_move() {
        let mut camera = camera();
        camera.move_local(Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(camera.position, Point3::new(0.0, 0.0, 0.0));
        assert!(camera.position.x.is_finite());
    }

    #[test]
    fn view_projection_is_cached_and_finite() {
        let mut camera = camera();
        let projection = Projection::new(1280, 720, Rad(1.3), 0.1, 100.0);
        let vp = camera.recompute_view_projection(&projection);

        assert_eq!(vp, camera.view_projection());
        let columns: [[f32; 4]; 4] = vp.into();
        assert!(columns.iter().flatten().all(|v| v.is_finite()));
        assert_ne!(vp, Matrix4::identity());
    }

    #[test]
    fn point_in_front_projects_inside_clip_space() {
        let mut camera = camera();
        let projection = Projection::new(800, 600, Rad(1.3), 0.1, 100.0);
        let vp = camera.recompute_view_projection(&projection);

        let clip = vp * Vector4::new(0.0, 0.0, -10.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < EPSILON && ndc.y.abs() < EPSILON);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn controller_cancels_opposite_keys() {
        let mut controller = CameraController::new();
        controller.intake_actions(&PlayerAction {
            move_forward: true,
            move_backward: true,
            ..Default::default()
        });
        assert!(!controller.has_updates());

        controller.intake_actions(&PlayerAction {
            move_up: true,
            ..Default::default()
        });
        let mut camera = camera();
        controller.apply_and_reset(&mut camera);
        assert!((camera.position.y - 0.1).abs() < EPSILON);
        assert!(!controller.has_updates());
    }

    #[test]
    fn controller_rotates_against_mouse_delta() {
        let mut controller = CameraController::new();
        controller.intake_actions(&PlayerAction {
            rotate_view: Some((10.0, 0.0)),
            ..Default::default()
        });
        let mut camera = camera();
        controller.apply_and_reset(&mut camera);
        assert!((camera.yaw().0 - (PI - 0.025)).abs() < EPSILON);
    }

    #[test]
    fn uniform_copies_cached_matrix() {
        let mut camera = camera();
        camera.recompute_view_projection(&Projection::new(4, 3, Rad(1.0), 0.1, 10.0));
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj_and_pos(&camera);

        let expected: [[f32; 4]; 4] = camera.view_projection().into();
        assert_eq!(uniform.view_proj(), expected);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 80);
    }
}
