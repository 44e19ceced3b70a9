//! Platform adapters
//!
//! An adapter turns native windowing events into calls on the
//! [`InputDispatcher`]. Translation of key, button, action and modifier codes
//! lives next to each adapter; [`pump_frame`] provides the per-tick loop that
//! brackets a batch of native events with `begin_frame` / `end_frame`.

#[cfg(feature = "glfw")]
pub mod glfw;
pub mod sdl;

#[cfg(feature = "glfw")]
pub use self::glfw::GlfwInputAdapter;
pub use self::sdl::{SdlInputAdapter, SdlInputEvent};

use super::InputDispatcher;

/// Translator from one platform's events to dispatcher calls
pub trait InputAdapter {
    /// Event type drained from the platform queue
    type NativeEvent;

    /// Forward one native event
    ///
    /// Returns `false` when the event carries no input the dispatcher tracks
    /// (window resize, focus change, unsupported button, ...).
    fn forward(&mut self, event: &Self::NativeEvent, dispatcher: &mut InputDispatcher) -> bool;

    /// Called by [`pump_frame`] before the dispatcher's frame begins
    fn begin_frame(&mut self) {}
}

/// Run one polling pass: begin the frame, forward every event, end the frame
///
/// Returns how many events reached the dispatcher. An empty batch still
/// produces a begin/end pair.
pub fn pump_frame<A, I>(adapter: &mut A, dispatcher: &mut InputDispatcher, events: I) -> usize
where
    A: InputAdapter,
    I: IntoIterator<Item = A::NativeEvent>,
{
    adapter.begin_frame();
    dispatcher.begin_frame();

    let mut forwarded = 0;
    for event in events {
        if adapter.forward(&event, dispatcher) {
            forwarded += 1;
        }
    }

    dispatcher.end_frame();
    forwarded
}
