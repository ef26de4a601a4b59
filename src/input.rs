//! Turns raw egui events into the discrete actions the overlay understands.

use egui::{Event, InputState, Key, PointerButton};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    SetOrigin,
    ResetOrigin,
    CycleUnit,
    ToggleUi,
    CycleMode,
    Copy,
}

pub fn key_action(key: Key) -> Option<Action> {
    match key {
        Key::Escape => Some(Action::Quit),
        Key::Num0 => Some(Action::ResetOrigin),
        Key::Tab => Some(Action::CycleUnit),
        Key::M => Some(Action::CycleMode),
        Key::C => Some(Action::Copy),
        _ => None,
    }
}

/// Actions fire on release, except the backtick toggle which egui only
/// reports as typed text.
pub fn event_action(event: &Event) -> Option<Action> {
    match event {
        Event::Key {
            key,
            pressed: false,
            ..
        } => key_action(*key),
        Event::PointerButton {
            button: PointerButton::Primary,
            pressed: false,
            ..
        } => Some(Action::SetOrigin),
        Event::Text(text) if text == "`" => Some(Action::ToggleUi),
        _ => None,
    }
}

/// All actions of this frame, in arrival order.
pub fn collect_actions(input: &InputState) -> Vec<Action> {
    input.events.iter().filter_map(event_action).collect()
}
