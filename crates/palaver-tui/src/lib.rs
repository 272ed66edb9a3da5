//! Terminal UI for the Palaver chat screen
//!
//! A thin shell over [`palaver_app::ChatScreen`] that provides
//! terminal-specific I/O. All interaction logic lives in the state machine;
//! this crate only handles terminal lifecycle and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod runtime;
pub mod ui;

pub use palaver_app::{
    ChatScreen, KeyInput, ScreenAction, ScreenConfig, ScreenEvent, SystemClock,
};
pub use runtime::{Runtime, RuntimeError};
