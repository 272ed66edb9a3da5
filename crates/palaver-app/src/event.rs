//! Screen events
//!
//! Events fed into the [`crate::ChatScreen`] state machine from terminal
//! input and system notifications.

use std::time::Duration;

use crate::KeyInput;

/// Events processed by the screen state machine.
#[derive(Debug, Clone)]
pub enum ScreenEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick carrying the elapsed time since the previous tick.
    /// Drives the fade animation.
    Tick {
        /// Time since the previous tick.
        elapsed: Duration,
    },

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Terminal gained focus. Snaps the message list to the newest entry.
    FocusGained,

    /// Terminal lost focus. Also snaps the message list to the newest entry.
    FocusLost,
}
