//! Subscriber capability set
//!
//! Every method has an empty default body, so a subscriber only overrides the
//! notifications it cares about.

use super::events::{KeyEvent, MouseButtonEvent, MouseMoveEvent, MouseScrollEvent};

/// Receiver of dispatched input notifications
///
/// Notifications arrive synchronously on the thread that drives the
/// [`InputDispatcher`](super::InputDispatcher), in subscription order.
pub trait InputSubscriber {
    /// A key was pressed, released or auto-repeated
    fn on_key_event(&mut self, _event: &KeyEvent) {}

    /// A mouse button was pressed or released
    fn on_mouse_button_event(&mut self, _event: &MouseButtonEvent) {}

    /// The cursor moved
    fn on_mouse_move_event(&mut self, _event: &MouseMoveEvent) {}

    /// The wheel or trackpad scrolled
    fn on_mouse_scroll_event(&mut self, _event: &MouseScrollEvent) {}

    /// A polling pass is starting
    fn on_input_frame_begin(&mut self) {}

    /// A polling pass has finished
    fn on_input_frame_end(&mut self) {}
}
