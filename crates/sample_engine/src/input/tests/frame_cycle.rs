//! End-to-end frame scenarios: ordering of notifications across subscribers,
//! subscription changes between frames and state observed after a pass

use std::cell::RefCell;
use std::rc::Rc;

use crate::input::adapter::{pump_frame, SdlInputAdapter, SdlInputEvent};
use crate::input::{
    InputAction, InputDispatcher, InputSubscriber, KeyCode, KeyEvent, Modifiers, MouseButtonEvent,
    MouseMoveEvent, MouseScrollEvent,
};

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    FrameBegin,
    Key(KeyCode, InputAction),
    Button,
    Move(f32, f32),
    Scroll(f32, f32),
    FrameEnd,
}

type Journal = Rc<RefCell<Vec<(&'static str, Seen)>>>;

/// Writes every notification into a journal shared between subscribers
struct Recorder {
    name: &'static str,
    journal: Journal,
}

impl Recorder {
    fn shared(name: &'static str, journal: &Journal) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            name,
            journal: Rc::clone(journal),
        }))
    }

    fn record(&self, seen: Seen) {
        self.journal.borrow_mut().push((self.name, seen));
    }
}

impl InputSubscriber for Recorder {
    fn on_key_event(&mut self, event: &KeyEvent) {
        self.record(Seen::Key(event.key, event.action));
    }

    fn on_mouse_button_event(&mut self, _event: &MouseButtonEvent) {
        self.record(Seen::Button);
    }

    fn on_mouse_move_event(&mut self, event: &MouseMoveEvent) {
        self.record(Seen::Move(event.delta_x, event.delta_y));
    }

    fn on_mouse_scroll_event(&mut self, event: &MouseScrollEvent) {
        self.record(Seen::Scroll(event.offset_x, event.offset_y));
    }

    fn on_input_frame_begin(&mut self) {
        self.record(Seen::FrameBegin);
    }

    fn on_input_frame_end(&mut self) {
        self.record(Seen::FrameEnd);
    }
}

fn seen_by(journal: &Journal, name: &str) -> Vec<Seen> {
    journal
        .borrow()
        .iter()
        .filter(|(who, _)| *who == name)
        .map(|(_, seen)| seen.clone())
        .collect()
}

#[test]
fn test_single_frame_notification_order() {
    let journal = Journal::default();
    let subscriber = Recorder::shared("s", &journal);

    let mut input = InputDispatcher::new();
    input.initialize();
    input.subscribe(&subscriber);
    input.begin_frame();
    input.process_key_event(KeyCode::A, InputAction::Press, 30, Modifiers::empty());
    input.end_frame();

    assert_eq!(
        seen_by(&journal, "s"),
        vec![
            Seen::FrameBegin,
            Seen::Key(KeyCode::A, InputAction::Press),
            Seen::FrameEnd,
        ]
    );
    assert!(input.is_key_pressed(KeyCode::A));
}

#[test]
fn test_fan_out_follows_subscription_order() {
    let journal = Journal::default();
    let first = Recorder::shared("first", &journal);
    let second = Recorder::shared("second", &journal);
    let third = Recorder::shared("third", &journal);

    let mut input = InputDispatcher::new();
    input.subscribe(&first);
    input.subscribe(&second);
    input.subscribe(&third);
    input.subscribe(&second);

    input.process_mouse_scroll_event(0.0, 1.0);

    let order: Vec<&str> = journal.borrow().iter().map(|(who, _)| *who).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn test_unsubscribe_between_frames_keeps_others_in_order() {
    let journal = Journal::default();
    let first = Recorder::shared("first", &journal);
    let second = Recorder::shared("second", &journal);
    let third = Recorder::shared("third", &journal);

    let mut input = InputDispatcher::new();
    input.subscribe(&first);
    input.subscribe(&second);
    input.subscribe(&third);

    input.begin_frame();
    input.end_frame();
    assert!(input.unsubscribe(&second));
    journal.borrow_mut().clear();

    input.begin_frame();
    input.process_key_event(KeyCode::Escape, InputAction::Press, 1, Modifiers::empty());
    input.end_frame();

    assert!(seen_by(&journal, "second").is_empty());
    let order: Vec<&str> = journal.borrow().iter().map(|(who, _)| *who).collect();
    assert_eq!(
        order,
        vec!["first", "third", "first", "third", "first", "third"]
    );
}

#[test]
fn test_first_move_is_silent_then_deltas_flow() {
    let journal = Journal::default();
    let camera = Recorder::shared("camera", &journal);

    let mut input = InputDispatcher::new();
    input.initialize();
    input.subscribe(&camera);

    input.begin_frame();
    input.process_mouse_move_event(10.0, 20.0, 0.0, 0.0);
    input.end_frame();

    input.begin_frame();
    input.process_mouse_move_event(15.0, 25.0, 0.0, 0.0);
    input.end_frame();

    assert_eq!(
        seen_by(&journal, "camera"),
        vec![
            Seen::FrameBegin,
            Seen::FrameEnd,
            Seen::FrameBegin,
            Seen::Move(5.0, -5.0),
            Seen::FrameEnd,
        ]
    );
    assert_eq!(input.mouse_delta(), (5.0, -5.0));

    input.begin_frame();
    assert_eq!(input.mouse_delta(), (0.0, 0.0));
    assert_eq!(input.mouse_position(), (15.0, 25.0));
}

#[test]
fn test_held_key_survives_frames_until_release() {
    let mut input = InputDispatcher::new();
    input.initialize();

    input.begin_frame();
    input.process_key_event(KeyCode::LeftShift, InputAction::Press, 42, Modifiers::SHIFT);
    input.end_frame();

    for _ in 0..3 {
        input.begin_frame();
        input.end_frame();
        assert!(input.is_key_pressed(KeyCode::LeftShift));
    }

    input.begin_frame();
    input.process_key_event(KeyCode::LeftShift, InputAction::Release, 42, Modifiers::empty());
    input.end_frame();
    assert!(input.is_key_released(KeyCode::LeftShift));
}

#[test]
fn test_empty_pump_still_brackets_frame() {
    let journal = Journal::default();
    let subscriber = Recorder::shared("s", &journal);

    let mut input = InputDispatcher::new();
    input.subscribe(&subscriber);
    let mut adapter = SdlInputAdapter::new();

    let forwarded = pump_frame(&mut adapter, &mut input, Vec::<SdlInputEvent>::new());

    assert_eq!(forwarded, 0);
    assert_eq!(seen_by(&journal, "s"), vec![Seen::FrameBegin, Seen::FrameEnd]);
}

#[test]
fn test_sdl_pass_with_repeat_and_passthrough_key() {
    let journal = Journal::default();
    let subscriber = Recorder::shared("s", &journal);

    let mut input = InputDispatcher::new();
    input.subscribe(&subscriber);
    let mut adapter = SdlInputAdapter::new();

    let events = [
        SdlInputEvent::Key { keycode: u32::from(b'w'), scancode: 26, modifiers: 0, down: true, repeat: false },
        SdlInputEvent::Key { keycode: u32::from(b'w'), scancode: 26, modifiers: 0, down: true, repeat: true },
        SdlInputEvent::Key { keycode: 0x4000_0120, scancode: 288, modifiers: 0, down: true, repeat: false },
        SdlInputEvent::MouseButton { button: 3, down: true },
    ];
    pump_frame(&mut adapter, &mut input, events);

    assert_eq!(
        seen_by(&journal, "s"),
        vec![
            Seen::FrameBegin,
            Seen::Key(KeyCode::W, InputAction::Press),
            Seen::Key(KeyCode::W, InputAction::Repeat),
            Seen::Key(KeyCode::Other(0x4000_0120), InputAction::Press),
            Seen::Button,
            Seen::FrameEnd,
        ]
    );
    assert!(input.is_key_pressed(KeyCode::W));
    assert!(input.is_key_pressed(KeyCode::Other(0x4000_0120)));
}
