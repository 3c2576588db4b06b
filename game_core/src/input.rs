/// Player controls exposed to the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    AimUp,
    AimDown,
    Fire,
    Pause,
}

/// Discrete press/release of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Press(Control),
    Release(Control),
}
