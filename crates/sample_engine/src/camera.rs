//! # Fly camera
//!
//! First-person camera driven entirely by input notifications: mouse motion
//! turns it, the wheel zooms it and WASD plus Space/LeftControl move it.
//! It subscribes to an [`InputDispatcher`](crate::input::InputDispatcher)
//! and is advanced once per rendered frame with [`FlyCamera::update`].
//!
//! Move deltas within one polling pass are measured from where the pass
//! began, so each move only turns the camera by the part of the delta it has
//! not applied yet.
//!
//! ## Coordinate System
//! Right-handed, Y-up. A yaw of -90 degrees looks down -Z.

use bitflags::bitflags;

use crate::config::CameraConfig;
use crate::foundation::math::{Mat4, Point3f, Vec3};
use crate::input::{InputSubscriber, KeyCode, KeyEvent, MouseMoveEvent, MouseScrollEvent};

bitflags! {
    /// Movement keys currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Movement: u8 {
        const FORWARD = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
    }
}

impl Movement {
    fn for_key(key: KeyCode) -> Self {
        match key {
            KeyCode::W => Self::FORWARD,
            KeyCode::S => Self::BACKWARD,
            KeyCode::A => Self::LEFT,
            KeyCode::D => Self::RIGHT,
            KeyCode::Space => Self::UP,
            KeyCode::LeftControl => Self::DOWN,
            _ => Self::empty(),
        }
    }
}

/// First-person camera controlled by input events
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    /// Degrees
    yaw: f32,
    /// Degrees
    pitch: f32,
    /// Vertical field of view in degrees
    fov: f32,
    settings: CameraConfig,
    movement: Movement,
    /// Mouse delta already applied during the current pass
    applied_look: (f32, f32),
}

impl FlyCamera {
    /// Create a camera at `position` looking down -Z
    pub fn new(position: Vec3, settings: CameraConfig) -> Self {
        let fov = settings.max_fov;
        let mut camera = Self {
            position,
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::y(),
            right: Vec3::x(),
            world_up: Vec3::y(),
            yaw: -90.0,
            pitch: 0.0,
            fov,
            settings,
            movement: Movement::empty(),
            applied_look: (0.0, 0.0),
        };
        camera.update_vectors();
        camera
    }

    /// Camera position in world space
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Whether any movement key is held
    pub fn is_moving(&self) -> bool {
        !self.movement.is_empty()
    }

    /// Move along the held directions for `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) {
        if self.movement.is_empty() {
            return;
        }

        let velocity = self.settings.move_speed * delta_time;
        let mut direction = Vec3::zeros();
        if self.movement.contains(Movement::FORWARD) {
            direction += self.front;
        }
        if self.movement.contains(Movement::BACKWARD) {
            direction -= self.front;
        }
        if self.movement.contains(Movement::RIGHT) {
            direction += self.right;
        }
        if self.movement.contains(Movement::LEFT) {
            direction -= self.right;
        }
        if self.movement.contains(Movement::UP) {
            direction += self.world_up;
        }
        if self.movement.contains(Movement::DOWN) {
            direction -= self.world_up;
        }

        self.position += direction * velocity;
    }

    /// View matrix for the current position and orientation
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3f::from(self.position),
            &Point3f::from(self.position + self.front),
            &self.up,
        )
    }

    /// Perspective projection using the current zoom
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new_perspective(aspect, self.fov.to_radians(), near, far)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(&self.world_up).normalize();
        self.up = self.right.cross(&self.front).normalize();
    }
}

impl InputSubscriber for FlyCamera {
    fn on_key_event(&mut self, event: &KeyEvent) {
        let movement = Movement::for_key(event.key);
        self.movement.set(movement, event.action.is_down());
    }

    fn on_mouse_move_event(&mut self, event: &MouseMoveEvent) {
        let sensitivity = self.settings.mouse_sensitivity;
        let limit = self.settings.pitch_limit;

        let (applied_x, applied_y) = self.applied_look;
        self.applied_look = (event.delta_x, event.delta_y);

        self.yaw += (event.delta_x - applied_x) * sensitivity;
        self.pitch = (self.pitch + (event.delta_y - applied_y) * sensitivity).clamp(-limit, limit);
        self.update_vectors();
        log::trace!("Camera yaw {:.1} pitch {:.1}", self.yaw, self.pitch);
    }

    fn on_mouse_scroll_event(&mut self, event: &MouseScrollEvent) {
        self.fov = (self.fov - event.offset_y * self.settings.scroll_zoom_speed)
            .clamp(self.settings.min_fov, self.settings.max_fov);
    }

    fn on_input_frame_begin(&mut self) {
        self.applied_look = (0.0, 0.0);
    }

    fn on_input_frame_end(&mut self) {
        self.applied_look = (0.0, 0.0);
    }
}
