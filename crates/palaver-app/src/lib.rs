//! Application layer for the Palaver chat screen
//!
//! Pure state machine for a single chat screen, enabling deterministic
//! testing with the same code that runs in the terminal front end.
//!
//! # Components
//!
//! - [`ChatScreen`]: screen state machine (draft editing, sending, exit
//!   confirmation, scroll and fade state)
//! - [`Clock`]: trait for injecting wall-clock time
//! - [`ScreenConfig`]: header title and color configuration

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod clock;
mod config;
mod draft;
mod event;
mod input;
mod screen;
mod state;

pub use action::ScreenAction;
pub use clock::{Clock, FixedClock, SystemClock, WallTime};
pub use config::{ConfigError, HeaderColor, ScreenConfig};
pub use draft::Draft;
pub use event::ScreenEvent;
pub use input::KeyInput;
pub use screen::ChatScreen;
pub use state::{ExitChoice, ExitPrompt, Fade, Message, MessageId, Scroll};
