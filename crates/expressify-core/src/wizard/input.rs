//! Input events and the widget capability shared by every step

/// One key event, already decoded from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Confirm,
    Cancel,
    Up,
    Down,
    Left,
    Right,
    Backspace,
    Char(char),
}

/// Transient per-step widget state (a text field or a list)
pub trait Widget {
    /// Apply a navigation or editing event. Never changes the current step.
    fn handle_input(&mut self, input: Input);

    /// Render the widget as terminal text
    fn render(&self) -> String;

    /// Whether confirming now would record a value
    fn is_complete(&self) -> bool;
}
