//! Window management using GLFW
//!
//! Opens a window with an OpenGL context and enables every input event the
//! sandbox forwards to the dispatcher.

use glfw::Context;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Window creation failed")]
    CreationFailed,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_cursor_mode(glfw::CursorMode::Disabled);

        log::info!("Created {width}x{height} window \"{title}\"");

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Events queued since the last poll, without their timestamps
    pub fn drain_events(&self) -> Vec<glfw::WindowEvent> {
        glfw::flush_messages(&self.events)
            .map(|(_, event)| event)
            .collect()
    }

    /// Seconds since GLFW was initialized
    pub fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
