//! Chat screen state machine.
//!
//! This module defines the [`ChatScreen`] state machine, which manages the
//! interactive state of the chat screen completely decoupled from terminal
//! I/O.
//!
//! This is a pure state machine: it consumes [`crate::ScreenEvent`] inputs
//! and produces [`crate::ScreenAction`] instructions for the runtime to
//! execute.
//!
//! # Responsibilities
//!
//! - Owns the message log, the draft buffer, and the exit confirmation.
//! - Drives the fade-in animation and the list scroll position.
//! - Stores terminal dimensions to handle resize events.

use crate::{
    Clock, Draft, ExitChoice, ExitPrompt, Fade, KeyInput, Message, MessageId, ScreenAction,
    ScreenConfig, ScreenEvent, Scroll,
};

/// Chat screen state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable with an injected [`Clock`].
#[derive(Debug, Clone)]
pub struct ChatScreen<C: Clock> {
    /// Screen configuration (header title and color).
    config: ScreenConfig,
    /// Wall-clock source for message timestamps and ids.
    clock: C,
    /// Sent messages, insertion order = display order.
    messages: Vec<Message>,
    /// Not-yet-sent input text.
    draft: Draft,
    /// Fade-in animation for the newest message.
    fade: Fade,
    /// Message-list scroll position.
    scroll: Scroll,
    /// Exit confirmation. `None` when closed.
    exit_prompt: Option<ExitPrompt>,
    /// Highest id handed out so far. Survives a message-list clear so ids
    /// stay strictly increasing for the whole session.
    last_id: MessageId,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl<C: Clock> ChatScreen<C> {
    /// Create a freshly mounted screen: no messages, empty draft, fade at 0.
    pub fn new(config: ScreenConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            messages: Vec::new(),
            draft: Draft::new(),
            fade: Fade::new(),
            scroll: Scroll::new(),
            exit_prompt: None,
            last_id: 0,
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: ScreenEvent) -> Vec<ScreenAction> {
        match event {
            ScreenEvent::Key(key) => self.handle_key(key),
            ScreenEvent::Tick { elapsed } => {
                if self.fade.advance(elapsed) {
                    vec![ScreenAction::Render]
                } else {
                    vec![]
                }
            },
            ScreenEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![ScreenAction::Render]
            },
            ScreenEvent::FocusGained | ScreenEvent::FocusLost => {
                self.scroll.to_end();
                vec![ScreenAction::Render]
            },
        }
    }

    /// Handle keyboard input, routing to the exit prompt while it is open.
    fn handle_key(&mut self, key: KeyInput) -> Vec<ScreenAction> {
        if self.exit_prompt.is_some() {
            return self.handle_prompt_key(key);
        }

        match key {
            KeyInput::Char(c) => {
                self.draft.insert(c);
                vec![ScreenAction::Render]
            },
            KeyInput::Backspace => {
                self.draft.backspace();
                vec![ScreenAction::Render]
            },
            KeyInput::Delete => {
                self.draft.delete();
                vec![ScreenAction::Render]
            },
            KeyInput::Left => {
                self.draft.move_left();
                vec![ScreenAction::Render]
            },
            KeyInput::Right => {
                self.draft.move_right();
                vec![ScreenAction::Render]
            },
            KeyInput::Home => {
                self.draft.move_home();
                vec![ScreenAction::Render]
            },
            KeyInput::End => {
                self.draft.move_end();
                vec![ScreenAction::Render]
            },
            KeyInput::Up => {
                self.scroll.up(self.messages.len().saturating_sub(1));
                vec![ScreenAction::Render]
            },
            KeyInput::Down => {
                self.scroll.down();
                vec![ScreenAction::Render]
            },
            KeyInput::Enter => self.send(),
            KeyInput::Esc => self.request_close(),
            KeyInput::Tab => vec![],
        }
    }

    /// Handle keys while the exit prompt is open. Everything except the
    /// explicit choices is swallowed; the prompt cannot be dismissed
    /// implicitly.
    fn handle_prompt_key(&mut self, key: KeyInput) -> Vec<ScreenAction> {
        match key {
            KeyInput::Left | KeyInput::Right | KeyInput::Tab => {
                if let Some(prompt) = self.exit_prompt.as_mut() {
                    prompt.toggle();
                }
                vec![ScreenAction::Render]
            },
            KeyInput::Enter => {
                let choice =
                    self.exit_prompt.map_or(ExitChoice::Cancel, |prompt| prompt.selected());
                self.resolve_exit(choice)
            },
            KeyInput::Esc => self.resolve_exit(ExitChoice::Cancel),
            _ => vec![],
        }
    }

    /// Replace the draft content. The send gate is derived from the new
    /// text; nothing else changes.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft.set_text(text);
    }

    /// Send the draft as a new message.
    ///
    /// A whitespace-only draft is rejected silently: no actions, draft
    /// untouched. Otherwise the message is appended, the draft cleared, the
    /// fade restarted from 0, and the list snapped to the newest entry, in
    /// that order.
    pub fn send(&mut self) -> Vec<ScreenAction> {
        if !self.send_enabled() {
            return vec![];
        }

        let now = self.clock.now();
        let id = self.next_id(now.millis);
        self.messages.push(Message { id, text: self.draft.text().to_owned(), time: now.hhmm() });
        self.draft.clear();
        self.fade.restart();
        self.scroll.to_end();
        tracing::debug!(id, count = self.messages.len(), "message appended");

        vec![ScreenAction::Render]
    }

    /// Open the exit confirmation with Cancel selected.
    pub fn request_close(&mut self) -> Vec<ScreenAction> {
        self.exit_prompt = Some(ExitPrompt::new());
        vec![ScreenAction::Render]
    }

    /// Resolve the exit confirmation.
    ///
    /// Cancel closes the prompt and changes nothing. Yes closes the prompt
    /// and clears the message list; the draft deliberately survives.
    pub fn resolve_exit(&mut self, choice: ExitChoice) -> Vec<ScreenAction> {
        self.exit_prompt = None;
        if choice == ExitChoice::Yes {
            let discarded = self.messages.len();
            self.messages.clear();
            self.scroll.to_end();
            tracing::debug!(discarded, "chat cleared on confirmed exit");
        }
        vec![ScreenAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<ScreenAction> {
        vec![ScreenAction::Quit]
    }

    /// Next message id: the current timestamp, bumped past the previous id
    /// when the clock stalls or repeats within a millisecond.
    fn next_id(&mut self, now_millis: u64) -> MessageId {
        let id = now_millis.max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }

    /// Whether the send control is active: true iff the trimmed draft is
    /// non-empty.
    pub fn send_enabled(&self) -> bool {
        !self.draft.is_blank()
    }

    /// Screen configuration.
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Sent messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Draft input state.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Fade-in animation state.
    pub fn fade(&self) -> &Fade {
        &self.fade
    }

    /// Message-list scroll position.
    pub fn scroll(&self) -> &Scroll {
        &self.scroll
    }

    /// Exit confirmation. `None` when closed.
    pub fn exit_prompt(&self) -> Option<&ExitPrompt> {
        self.exit_prompt.as_ref()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// The injected clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
