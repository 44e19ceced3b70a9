//! Frame-scoped input dispatcher
//!
//! Owns the current keyboard and mouse state and fans every event out to the
//! registered subscribers. The dispatcher never polls a platform itself: an
//! adapter calls [`InputDispatcher::begin_frame`], feeds translated events
//! through the `process_*` entry points and closes the pass with
//! [`InputDispatcher::end_frame`].
//!
//! # Subscribers
//!
//! Subscribers are shared as `Rc<RefCell<S>>` and the dispatcher only keeps a
//! [`Weak`] reference to each, so dropping the last strong handle is enough to
//! stop notifications. Registration is by identity: subscribing the same
//! handle twice is a no-op.
//!
//! Fan-out walks a snapshot of the subscriber list. A subscriber that is
//! already mutably borrowed when a notification arrives is skipped.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::config::InputConfig;

use super::events::{KeyEvent, MouseButtonEvent, MouseMoveEvent, MouseScrollEvent};
use super::keys::{InputAction, KeyCode, Modifiers, MouseButton};
use super::subscriber::InputSubscriber;

type SubscriberRef = Weak<RefCell<dyn InputSubscriber>>;

/// Cursor position, per-frame motion and scroll
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CursorState {
    x: f32,
    y: f32,
    last_x: f32,
    last_y: f32,
    delta_x: f32,
    delta_y: f32,
    scroll_x: f32,
    scroll_y: f32,
}

/// Process-wide input state and event fan-out hub
///
/// Construct one per application and pass it by reference to whatever feeds
/// or reads input.
pub struct InputDispatcher {
    config: InputConfig,
    key_states: HashMap<KeyCode, bool>,
    mouse_button_states: [bool; MouseButton::COUNT],
    cursor: CursorState,
    first_mouse: bool,
    subscribers: Vec<SubscriberRef>,
}

impl InputDispatcher {
    /// Create a dispatcher with default settings
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Create a dispatcher with the given settings
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            key_states: HashMap::new(),
            mouse_button_states: [false; MouseButton::COUNT],
            cursor: CursorState::default(),
            first_mouse: true,
            subscribers: Vec::new(),
        }
    }

    /// Active settings
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Reset every cached key, button and cursor value
    ///
    /// The subscriber list is left alone.
    pub fn initialize(&mut self) {
        self.reset_state();
        log::debug!(
            "Input dispatcher initialized with {} subscriber(s)",
            self.subscriber_count()
        );
    }

    /// Drop all subscribers and cached state
    pub fn shutdown(&mut self) {
        self.subscribers.clear();
        self.reset_state();
        log::debug!("Input dispatcher shut down");
    }

    fn reset_state(&mut self) {
        self.key_states.clear();
        self.mouse_button_states = [false; MouseButton::COUNT];
        self.cursor = CursorState::default();
        self.first_mouse = true;
    }

    /// Register a subscriber
    ///
    /// Returns `false` when the same handle is already registered.
    pub fn subscribe<S>(&mut self, subscriber: &Rc<RefCell<S>>) -> bool
    where
        S: InputSubscriber + 'static,
    {
        let shared: Rc<RefCell<dyn InputSubscriber>> = subscriber.clone();
        self.subscribe_shared(&shared)
    }

    /// Register a subscriber already held as a trait object
    ///
    /// Identity is the allocation, so a concrete handle and a trait-object
    /// handle to the same subscriber count as one registration.
    pub fn subscribe_shared(&mut self, subscriber: &Rc<RefCell<dyn InputSubscriber>>) -> bool {
        let handle = Rc::downgrade(subscriber);

        if self.subscribers.iter().any(|existing| existing.ptr_eq(&handle)) {
            return false;
        }

        self.subscribers.push(handle);
        log::debug!("Input subscriber added ({} total)", self.subscribers.len());
        true
    }

    /// Remove a subscriber
    ///
    /// Returns `false` when the handle was not registered.
    pub fn unsubscribe<S>(&mut self, subscriber: &Rc<RefCell<S>>) -> bool
    where
        S: InputSubscriber + 'static,
    {
        let shared: Rc<RefCell<dyn InputSubscriber>> = subscriber.clone();
        self.unsubscribe_shared(&shared)
    }

    /// Remove a subscriber held as a trait object
    pub fn unsubscribe_shared(&mut self, subscriber: &Rc<RefCell<dyn InputSubscriber>>) -> bool {
        let handle = Rc::downgrade(subscriber);

        match self.subscribers.iter().position(|existing| existing.ptr_eq(&handle)) {
            Some(index) => {
                self.subscribers.remove(index);
                log::debug!("Input subscriber removed ({} left)", self.subscribers.len());
                true
            }
            None => false,
        }
    }

    /// Number of registered subscribers that are still alive
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|subscriber| subscriber.strong_count() > 0)
            .count()
    }

    /// Start a polling pass
    ///
    /// Subscribers hear about it first; the per-frame delta and scroll are
    /// zeroed afterwards.
    pub fn begin_frame(&mut self) {
        self.notify(|subscriber| subscriber.on_input_frame_begin());

        self.cursor.delta_x = 0.0;
        self.cursor.delta_y = 0.0;
        self.cursor.scroll_x = 0.0;
        self.cursor.scroll_y = 0.0;
    }

    /// Finish a polling pass
    ///
    /// The current cursor position becomes the reference for deltas derived
    /// during the next pass.
    pub fn end_frame(&mut self) {
        self.cursor.last_x = self.cursor.x;
        self.cursor.last_y = self.cursor.y;

        self.notify(|subscriber| subscriber.on_input_frame_end());
    }

    /// Record a key transition and notify subscribers
    ///
    /// Repeats are passed through as-is and keep the key held. A
    /// [`KeyCode::Other`] whose value has a named variant is stored and
    /// reported as that variant.
    pub fn process_key_event(
        &mut self,
        key: KeyCode,
        action: InputAction,
        scancode: i32,
        mods: Modifiers,
    ) {
        let key = key.normalized();
        self.key_states.insert(key, action.is_down());

        let event = KeyEvent {
            key,
            action,
            scancode,
            mods,
        };
        log::trace!("{event:?}");
        self.notify(|subscriber| subscriber.on_key_event(&event));
    }

    /// Record a mouse button transition and notify subscribers
    ///
    /// The event carries the cached cursor position.
    pub fn process_mouse_button_event(
        &mut self,
        button: MouseButton,
        action: InputAction,
        mods: Modifiers,
    ) {
        self.mouse_button_states[button.index()] = action.is_down();

        let event = MouseButtonEvent {
            button,
            action,
            mods,
            x: self.cursor.x,
            y: self.cursor.y,
        };
        log::trace!("{event:?}");
        self.notify(|subscriber| subscriber.on_mouse_button_event(&event));
    }

    /// Record a cursor move and notify subscribers
    ///
    /// The first move after [`initialize`](Self::initialize) or
    /// [`set_first_mouse(true)`](Self::set_first_mouse) only seeds the
    /// position and dispatches nothing. Later moves use `delta_x`/`delta_y`
    /// when either is nonzero, otherwise the delta is derived from the
    /// position recorded at the last [`end_frame`](Self::end_frame).
    pub fn process_mouse_move_event(&mut self, x: f32, y: f32, delta_x: f32, delta_y: f32) {
        if self.first_mouse {
            self.cursor.x = x;
            self.cursor.y = y;
            self.cursor.last_x = x;
            self.cursor.last_y = y;
            self.first_mouse = false;
            log::trace!("First cursor position seeded at ({x}, {y})");
            return;
        }

        #[allow(clippy::float_cmp)]
        let (delta_x, delta_y) = if delta_x == 0.0 && delta_y == 0.0 {
            let derived_y = if self.config.invert_derived_y {
                self.cursor.last_y - y
            } else {
                y - self.cursor.last_y
            };
            (x - self.cursor.last_x, derived_y)
        } else {
            (delta_x, delta_y)
        };

        self.cursor.x = x;
        self.cursor.y = y;
        self.cursor.delta_x = delta_x;
        self.cursor.delta_y = delta_y;

        let event = MouseMoveEvent {
            x,
            y,
            delta_x,
            delta_y,
        };
        log::trace!("{event:?}");
        self.notify(|subscriber| subscriber.on_mouse_move_event(&event));
    }

    /// Record a scroll and notify subscribers immediately
    pub fn process_mouse_scroll_event(&mut self, offset_x: f32, offset_y: f32) {
        self.cursor.scroll_x = offset_x;
        self.cursor.scroll_y = offset_y;

        let event = MouseScrollEvent { offset_x, offset_y };
        log::trace!("{event:?}");
        self.notify(|subscriber| subscriber.on_mouse_scroll_event(&event));
    }

    /// Arm or disarm first-mouse suppression
    pub fn set_first_mouse(&mut self, first_mouse: bool) {
        self.first_mouse = first_mouse;
    }

    /// Whether the next cursor move will only seed the position
    pub fn is_first_mouse(&self) -> bool {
        self.first_mouse
    }

    /// Whether the key is currently held; never-seen keys are released
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.key_states.get(&key.normalized()).copied().unwrap_or(false)
    }

    /// Negation of [`is_key_pressed`](Self::is_key_pressed)
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        !self.is_key_pressed(key)
    }

    /// Whether the button is currently held
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_button_states[button.index()]
    }

    /// Negation of [`is_mouse_button_pressed`](Self::is_mouse_button_pressed)
    pub fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        !self.is_mouse_button_pressed(button)
    }

    /// Cached cursor position
    pub fn mouse_position(&self) -> (f32, f32) {
        (self.cursor.x, self.cursor.y)
    }

    /// Motion accumulated during the current pass
    pub fn mouse_delta(&self) -> (f32, f32) {
        (self.cursor.delta_x, self.cursor.delta_y)
    }

    /// Scroll recorded during the current pass
    pub fn scroll(&self) -> (f32, f32) {
        (self.cursor.scroll_x, self.cursor.scroll_y)
    }

    /// Cached cursor X
    pub fn mouse_x(&self) -> f32 {
        self.cursor.x
    }

    /// Cached cursor Y
    pub fn mouse_y(&self) -> f32 {
        self.cursor.y
    }

    /// Horizontal motion this pass
    pub fn mouse_delta_x(&self) -> f32 {
        self.cursor.delta_x
    }

    /// Vertical motion this pass
    pub fn mouse_delta_y(&self) -> f32 {
        self.cursor.delta_y
    }

    /// Horizontal scroll this pass
    pub fn scroll_x(&self) -> f32 {
        self.cursor.scroll_x
    }

    /// Vertical scroll this pass
    pub fn scroll_y(&self) -> f32 {
        self.cursor.scroll_y
    }

    /// Call `f` on every live subscriber in subscription order
    fn notify(&mut self, mut f: impl FnMut(&mut dyn InputSubscriber)) {
        self.subscribers.retain(|subscriber| subscriber.strong_count() > 0);

        let snapshot = self.subscribers.clone();
        for handle in &snapshot {
            let Some(subscriber) = handle.upgrade() else {
                continue;
            };
            let borrowed = subscriber.try_borrow_mut();
            match borrowed {
                Ok(mut subscriber) => f(&mut *subscriber),
                Err(_) => log::warn!("Skipping input subscriber that is already borrowed"),
            }
        }
    }
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
