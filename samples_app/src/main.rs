//! Input sandbox
//!
//! Opens a window, routes GLFW input through the dispatcher and flies a
//! camera around with WASD, Space, LeftControl, the mouse and the wheel.
//! Escape quits. Run with `RUST_LOG=debug` to see per-frame summaries.

mod window;

use std::cell::RefCell;
use std::rc::Rc;

use sample_engine::foundation::logging;
use sample_engine::prelude::*;

use window::Window;

const CONFIG_PATH: &str = "input_sandbox.toml";

/// Counts events per polling pass and logs a summary at frame end
#[derive(Default)]
struct EventLogger {
    frame: u64,
    keys: usize,
    buttons: usize,
    moves: usize,
    scrolls: usize,
}

impl InputSubscriber for EventLogger {
    fn on_key_event(&mut self, event: &KeyEvent) {
        self.keys += 1;
        if event.action == InputAction::Press {
            log::debug!("{:?} pressed with {:?}", event.key, event.mods);
        }
    }

    fn on_mouse_button_event(&mut self, event: &MouseButtonEvent) {
        self.buttons += 1;
        log::debug!("{:?} {:?} at ({}, {})", event.button, event.action, event.x, event.y);
    }

    fn on_mouse_move_event(&mut self, _event: &MouseMoveEvent) {
        self.moves += 1;
    }

    fn on_mouse_scroll_event(&mut self, _event: &MouseScrollEvent) {
        self.scrolls += 1;
    }

    fn on_input_frame_begin(&mut self) {
        self.frame += 1;
        self.keys = 0;
        self.buttons = 0;
        self.moves = 0;
        self.scrolls = 0;
    }

    fn on_input_frame_end(&mut self) {
        if self.keys + self.buttons + self.moves + self.scrolls > 0 {
            log::debug!(
                "Frame {}: {} key, {} button, {} move, {} scroll event(s)",
                self.frame,
                self.keys,
                self.buttons,
                self.moves,
                self.scrolls
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = InputConfig::load_or_default(CONFIG_PATH)?;
    config.validate()?;

    let mut window = Window::new("Input Sandbox", 1280, 720)?;

    let mut input = InputDispatcher::with_config(config.clone());
    input.initialize();

    let camera = Rc::new(RefCell::new(FlyCamera::new(
        Vec3::new(0.0, 0.0, 3.0),
        config.camera,
    )));
    let event_logger = Rc::new(RefCell::new(EventLogger::default()));
    input.subscribe(&camera);
    input.subscribe(&event_logger);

    let mut adapter = GlfwInputAdapter;
    let mut last_time = window.time();

    log::info!("Starting input sandbox (Escape to quit)");
    while !window.should_close() {
        let now = window.time();
        #[allow(clippy::cast_possible_truncation)]
        let delta_time = (now - last_time) as f32;
        last_time = now;

        window.poll_events();
        pump_frame(&mut adapter, &mut input, window.drain_events());

        if input.is_key_pressed(KeyCode::Escape) {
            window.set_should_close(true);
        }

        camera.borrow_mut().update(delta_time);
        window.swap_buffers();
    }

    let camera = camera.borrow();
    log::info!(
        "Camera finished at {:?} (yaw {:.1}, pitch {:.1}, fov {:.1})",
        camera.position(),
        camera.yaw(),
        camera.pitch(),
        camera.fov()
    );

    input.shutdown();
    Ok(())
}
