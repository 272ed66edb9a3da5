//! Async runtime
//!
//! Event loop that drives terminal I/O for one mounted chat screen. Uses
//! tokio::select! to multiplex terminal events with the animation tick.
//!
//! Terminal resources are scoped to the runtime's lifetime: raw mode, the
//! alternate screen, and focus-change reporting are acquired exactly once in
//! [`Runtime::new`] and released exactly once in `Drop`, no matter how many
//! render cycles happen in between.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableFocusChange, EnableFocusChange, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use palaver_app::{ChatScreen, KeyInput, ScreenAction, ScreenConfig, ScreenEvent, SystemClock};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// Animation clock cadence. Ten steps across the 500 ms fade.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Async runtime for the chat screen.
///
/// Owns the terminal and the [`ChatScreen`] state machine, translating
/// crossterm events into screen events and executing the returned actions.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    screen: ChatScreen<SystemClock>,
}

impl Runtime {
    /// Create a new runtime and mount the screen.
    ///
    /// Enters raw mode and the alternate screen, and subscribes to
    /// focus-change reports.
    pub fn new(config: ScreenConfig) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableFocusChange)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let screen = ChatScreen::new(config, SystemClock);

        Ok(Self { terminal, screen })
    }

    /// Run the main event loop until quit.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;

        let mut event_stream = EventStream::new();
        let mut ticks = tokio::time::interval(TICK_INTERVAL);

        loop {
            let should_quit = tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event)?,
                        Some(Err(e)) => return Err(RuntimeError::Io(e)),
                        None => true,
                    }
                }

                _ = ticks.tick() => {
                    let actions = self.screen.handle(ScreenEvent::Tick {
                        elapsed: TICK_INTERVAL,
                    });
                    self.process_actions(actions)?
                }
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a terminal event and return whether to quit.
    fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let screen_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_interrupt(&key) {
                    tracing::debug!("interrupt received, shutting down");
                    let actions = self.screen.quit();
                    return self.process_actions(actions);
                }
                match convert_key(key.code) {
                    Some(key_input) => ScreenEvent::Key(key_input),
                    None => return Ok(false),
                }
            },
            Event::Resize(cols, rows) => ScreenEvent::Resize(cols, rows),
            Event::FocusGained => ScreenEvent::FocusGained,
            Event::FocusLost => ScreenEvent::FocusLost,
            _ => return Ok(false),
        };

        let actions = self.screen.handle(screen_event);
        self.process_actions(actions)
    }

    /// Execute actions returned by the screen. Returns true if should quit.
    fn process_actions(&mut self, actions: Vec<ScreenAction>) -> Result<bool, RuntimeError> {
        for action in actions {
            match action {
                ScreenAction::Render => self.render()?,
                ScreenAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        let screen = &self.screen;
        self.terminal.draw(|frame| ui::render(frame, screen))?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = stdout().execute(DisableFocusChange);
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Convert crossterm `KeyCode` to the terminal-agnostic `KeyInput`.
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

/// Ctrl+C quits the application.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_keys_convert() {
        assert_eq!(convert_key(KeyCode::Char('a')), Some(KeyInput::Char('a')));
        assert_eq!(convert_key(KeyCode::Enter), Some(KeyInput::Enter));
        assert_eq!(convert_key(KeyCode::Esc), Some(KeyInput::Esc));
        assert_eq!(convert_key(KeyCode::F(1)), None);
    }

    #[test]
    fn ctrl_c_is_an_interrupt() {
        assert!(is_interrupt(&key_event(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(&key_event(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_interrupt(&key_event(KeyCode::Char('x'), KeyModifiers::CONTROL)));
    }
}
