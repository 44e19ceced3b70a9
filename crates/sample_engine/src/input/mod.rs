//! Input management system
//!
//! Platform adapters translate native events into canonical ones and feed
//! them to the [`InputDispatcher`], which keeps level state for keys, buttons
//! and the cursor and notifies every [`InputSubscriber`] once per event.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use sample_engine::input::{
//!     InputAction, InputDispatcher, InputSubscriber, KeyCode, KeyEvent, Modifiers,
//! };
//!
//! #[derive(Default)]
//! struct Jump(bool);
//!
//! impl InputSubscriber for Jump {
//!     fn on_key_event(&mut self, event: &KeyEvent) {
//!         if event.key == KeyCode::Space && event.action == InputAction::Press {
//!             self.0 = true;
//!         }
//!     }
//! }
//!
//! let mut input = InputDispatcher::new();
//! let jump = Rc::new(RefCell::new(Jump::default()));
//! input.subscribe(&jump);
//!
//! input.begin_frame();
//! input.process_key_event(KeyCode::Space, InputAction::Press, 57, Modifiers::empty());
//! input.end_frame();
//!
//! assert!(jump.borrow().0);
//! assert!(input.is_key_pressed(KeyCode::Space));
//! ```

pub mod adapter;
pub mod dispatcher;
pub mod events;
pub mod keys;
pub mod subscriber;

#[cfg(test)]
mod tests;

pub use adapter::{pump_frame, InputAdapter};
pub use dispatcher::InputDispatcher;
pub use events::{KeyEvent, MouseButtonEvent, MouseMoveEvent, MouseScrollEvent};
pub use keys::{InputAction, KeyCode, Modifiers, MouseButton};
pub use subscriber::InputSubscriber;
