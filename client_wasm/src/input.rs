//! Keyboard input handling

use game_core::{Control, InputEvent};

/// Map a `KeyboardEvent.key` value to a game control
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "ArrowLeft" => Some(Control::Left),
        "ArrowRight" => Some(Control::Right),
        "ArrowUp" => Some(Control::AimUp),
        "ArrowDown" => Some(Control::AimDown),
        "z" | "Z" => Some(Control::Fire),
        "p" | "P" | "Escape" => Some(Control::Pause),
        _ => None,
    }
}

/// Handle key down event. Auto-repeat keeps steering and aiming but must
/// not flip the pause toggle back and forth.
pub fn handle_key_down(key: &str, repeat: bool) -> Option<InputEvent> {
    match control_for_key(key)? {
        Control::Pause if repeat => None,
        control => Some(InputEvent::Press(control)),
    }
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<InputEvent> {
    control_for_key(key).map(InputEvent::Release)
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_key_from_event(event: &web_sys::KeyboardEvent) -> String {
    event.key()
}
