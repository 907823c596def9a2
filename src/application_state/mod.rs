//! # Application State Management
//!
//! This module sits between the windowing layer and the engine:
//! - Input handling, from winit events to per-frame [`ProcessedInputState`] snapshots
//! - Frame pacing and exit requests
//!
//! The window and surface themselves are owned by whoever drives the event loop;
//! [`ApplicationState`] only needs to be fed the events.

pub mod input_manager;
pub mod input_state;

use input_manager::InputManager;
use input_state::ProcessedInputState;
use log::debug;
use web_time::{Duration, Instant};
use winit::event::WindowEvent;

use crate::engine_state::{EngineState, FrameData};

/// The running application: the engine plus the input collected for its next frame.
#[derive(Debug)]
pub struct ApplicationState {
    /// The core engine state and logic
    pub engine_state: EngineState,

    /// Manages input state and event processing
    pub input_manager: InputManager,

    /// Timestamp of the last frame for delta time calculations
    pub last_frame_time: Instant,

    exit_requested: bool,
}

impl ApplicationState {
    pub fn new(engine_state: EngineState) -> Self {
        Self {
            engine_state,
            input_manager: InputManager::new(),
            last_frame_time: Instant::now(),
            exit_requested: false,
        }
    }

    /// Handles window-related events such as resize, focus changes and input.
    pub fn window_event(&mut self, event: &WindowEvent) {
        self.input_manager.intake_input(event);

        match event {
            WindowEvent::Resized(size) => self.engine_state.resize(size.width, size.height),
            WindowEvent::Focused(false) => self.input_manager.reset_inputs(),
            WindowEvent::CloseRequested => self.exit_requested = true,
            _ => (),
        }
    }

    /// Handles raw mouse motion.
    pub fn mouse_motion(&mut self, delta: (f64, f64)) {
        self.input_manager.intake_mouse_motion(delta);
    }

    /// Whether the window was closed or Escape was pressed.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Consumes this frame's input and advances the engine by one frame.
    pub fn advance_frame(&mut self) -> (FrameData<'_>, Duration) {
        let now = Instant::now();
        let frame_time = now - self.last_frame_time;
        self.last_frame_time = now;

        let processed_input: ProcessedInputState =
            self.input_manager.get_and_reset_processed_input();
        let player_action = EngineState::translate_processed_input(&processed_input);
        if player_action.exit_requested {
            debug!("Exit requested");
            self.exit_requested = true;
        }

        (self.engine_state.update(&player_action), frame_time)
    }
}
