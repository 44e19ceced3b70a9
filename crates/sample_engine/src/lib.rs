//! # Sample Engine
//!
//! Windowing and input scaffold shared by the OpenGL samples.
//!
//! ## Features
//!
//! - **Input dispatch**: frame-scoped keyboard and mouse state with
//!   synchronous fan-out to subscribers
//! - **Platform adapters**: GLFW (`glfw` feature) and SDL3 code translation
//! - **Fly camera**: a ready-made subscriber for first-person navigation
//! - **Configuration**: TOML or RON settings files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use sample_engine::prelude::*;
//!
//! let config = InputConfig::load_or_default("input.toml").unwrap();
//! let mut input = InputDispatcher::with_config(config.clone());
//! input.initialize();
//!
//! let camera = Rc::new(RefCell::new(FlyCamera::new(Vec3::new(0.0, 0.0, 3.0), config.camera)));
//! input.subscribe(&camera);
//!
//! let mut adapter = SdlInputAdapter::new();
//! loop {
//!     let events: Vec<SdlInputEvent> = Vec::new(); // drained from SDL
//!     pump_frame(&mut adapter, &mut input, events);
//!     if input.is_key_pressed(KeyCode::Escape) {
//!         break;
//!     }
//!     camera.borrow_mut().update(1.0 / 60.0);
//! }
//! input.shutdown();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod camera;
pub mod config;
pub mod foundation;
pub mod input;

/// Common imports for engine users
pub mod prelude {
    #[cfg(feature = "glfw")]
    pub use crate::input::adapter::GlfwInputAdapter;
    pub use crate::{
        camera::FlyCamera,
        config::{CameraConfig, Config, ConfigError, InputConfig},
        foundation::math::{Mat4, Vec3},
        input::{
            adapter::{SdlInputAdapter, SdlInputEvent},
            pump_frame, InputAction, InputAdapter, InputDispatcher, InputSubscriber, KeyCode,
            KeyEvent, Modifiers, MouseButton, MouseButtonEvent, MouseMoveEvent, MouseScrollEvent,
        },
    };
}
