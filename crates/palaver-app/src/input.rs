//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the screen state machine from terminal libraries (crossterm,
/// termion, etc.) enabling deterministic testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (send the draft).
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Tab key (toggle the exit prompt selection).
    Tab,
    /// Escape key (open the exit prompt).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key (scroll the list towards older messages).
    Up,
    /// Down arrow key (scroll the list towards newer messages).
    Down,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}
