//! Input translation: macroquad polling into discrete events, and events into
//! simulation commands.

use log::info;
use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::domain::presets;

/// Pointer buttons the simulator reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Keyboard commands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Start,
    Pause,
    Reset,
    Step,
    Randomize,
    /// Stamp the preset at this index of `presets::all_patterns()`
    Pattern(usize),
}

/// One discrete input event, in window pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerMoved { x: f32, y: f32 },
    PointerPressed { button: PointerButton, x: f32, y: f32 },
    KeyPressed(KeyCommand),
}

const KEY_BINDINGS: [(KeyCode, KeyCommand); 12] = [
    (KeyCode::S, KeyCommand::Start),
    (KeyCode::P, KeyCommand::Pause),
    (KeyCode::Enter, KeyCommand::Reset),
    (KeyCode::C, KeyCommand::Reset),
    (KeyCode::N, KeyCommand::Step),
    (KeyCode::R, KeyCommand::Randomize),
    (KeyCode::Key1, KeyCommand::Pattern(0)),
    (KeyCode::Key2, KeyCommand::Pattern(1)),
    (KeyCode::Key3, KeyCommand::Pattern(2)),
    (KeyCode::Key4, KeyCommand::Pattern(3)),
    (KeyCode::Key5, KeyCommand::Pattern(4)),
    (KeyCode::Key6, KeyCommand::Pattern(5)),
];

/// Turns macroquad's per-frame input state into a queue of events
#[derive(Debug, Default)]
pub struct EventPoller {
    last_pointer: Option<(f32, f32)>,
}

impl EventPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect this frame's events. Requires `prevent_quit()` at startup so that
    /// closing the window arrives here as `Quit`.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            events.push(InputEvent::Quit);
        }

        let (x, y) = mouse_position();
        if self.last_pointer != Some((x, y)) {
            self.last_pointer = Some((x, y));
            events.push(InputEvent::PointerMoved { x, y });
        }

        let buttons = [
            (MouseButton::Left, PointerButton::Primary),
            (MouseButton::Right, PointerButton::Secondary),
        ];
        events.extend(
            buttons
                .into_iter()
                .filter(|(button, _)| is_mouse_button_pressed(*button))
                .map(|(_, button)| InputEvent::PointerPressed { button, x, y }),
        );

        events.extend(
            KEY_BINDINGS
                .iter()
                .filter(|(key, _)| is_key_pressed(*key))
                .map(|(_, command)| InputEvent::KeyPressed(*command)),
        );

        events
    }
}

/// Apply one event to the simulation
pub fn apply_event(mut state: GameState, viewport: &Viewport, event: InputEvent) -> GameState {
    match event {
        InputEvent::Quit => {
            info!("quit requested");
            state.quit_requested = true;
            state
        }
        InputEvent::PointerMoved { x, y } => {
            state.highlighted = viewport.screen_to_cell(x, y);
            state
        }
        InputEvent::PointerPressed { button, x, y } => {
            if let Some((gx, gy)) = viewport.screen_to_cell(x, y) {
                state.paint(gx, gy, button == PointerButton::Primary);
            }
            state
        }
        InputEvent::KeyPressed(command) => apply_command(state, command),
    }
}

fn apply_command(mut state: GameState, command: KeyCommand) -> GameState {
    match command {
        KeyCommand::Start => state.start(),
        KeyCommand::Pause => state.pause(),
        KeyCommand::Reset => state.reset(),
        KeyCommand::Step => state.step_once(),
        KeyCommand::Randomize => state.randomize(),
        KeyCommand::Pattern(idx) => {
            if let Some(pattern) = presets::all_patterns().get(idx) {
                state.stamp(pattern);
            }
            state
        }
    }
}

/// Apply a batch of events in order
pub fn apply_events(
    state: GameState,
    viewport: &Viewport,
    events: impl IntoIterator<Item = InputEvent>,
) -> GameState {
    events
        .into_iter()
        .fold(state, |s, event| apply_event(s, viewport, event))
}
