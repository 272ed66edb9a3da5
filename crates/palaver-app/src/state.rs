//! Observable screen state types.
//!
//! Data structures representing the screen's current view of the session:
//! the message log entries plus the small mutable pieces (fade animation,
//! list scroll position, exit confirmation) the state machine drives.

use std::time::Duration;

/// Message identifier. Strictly increasing in send order.
pub type MessageId = u64;

/// One sent chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Timestamp-derived identifier, unique within the session.
    pub id: MessageId,
    /// Draft content at send time, stored verbatim.
    pub text: String,
    /// Wall-clock time at creation, formatted `"HH:MM"`.
    pub time: String,
}

/// Fade-in animation state for the newest message.
///
/// Progress runs linearly from 0 to 1 over [`Fade::DURATION`]; the state
/// machine restarts it on every send and advances it on tick events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    progress: f32,
    running: bool,
}

impl Fade {
    /// Fixed animation length.
    pub const DURATION: Duration = Duration::from_millis(500);

    /// A fresh fade: progress 0, not running.
    pub fn new() -> Self {
        Self { progress: 0.0, running: false }
    }

    /// Restart the animation from 0.
    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.running = true;
    }

    /// Advance by `elapsed`, clamping progress to 1. Returns whether the
    /// progress value changed (i.e. a redraw is needed).
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }

        let step = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        let before = self.progress;
        self.progress = (self.progress + step).min(1.0);
        if self.progress >= 1.0 {
            self.running = false;
        }
        self.progress > before
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the animation is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new()
    }
}

/// Message-list scroll position, measured from the newest entry.
///
/// Offset 0 pins the view to the bottom. All operations saturate, so a
/// scroll request against an empty list is a no-op rather than a crash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll {
    offset_from_end: usize,
}

impl Scroll {
    /// A scroll pinned to the newest entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snap to the newest entry.
    pub fn to_end(&mut self) {
        self.offset_from_end = 0;
    }

    /// Move one entry towards older messages, bounded by `max`.
    pub fn up(&mut self, max: usize) {
        self.offset_from_end = self.offset_from_end.saturating_add(1).min(max);
    }

    /// Move one entry towards newer messages.
    pub fn down(&mut self) {
        self.offset_from_end = self.offset_from_end.saturating_sub(1);
    }

    /// Entries between the view anchor and the newest entry.
    pub fn offset_from_end(&self) -> usize {
        self.offset_from_end
    }
}

/// Choice offered by the exit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    /// Dismiss the prompt, change nothing.
    Cancel,
    /// Clear the message list.
    Yes,
}

/// Exit confirmation prompt state.
///
/// While open, the prompt blocks every other interaction; it resolves only
/// through an explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitPrompt {
    selected: ExitChoice,
}

impl ExitPrompt {
    /// Open a prompt with the safe default selected.
    pub fn new() -> Self {
        Self { selected: ExitChoice::Cancel }
    }

    /// Flip the selection between Cancel and Yes.
    pub fn toggle(&mut self) {
        self.selected = match self.selected {
            ExitChoice::Cancel => ExitChoice::Yes,
            ExitChoice::Yes => ExitChoice::Cancel,
        };
    }

    /// Currently highlighted choice.
    pub fn selected(&self) -> ExitChoice {
        self.selected
    }
}

impl Default for ExitPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_starts_idle_at_zero() {
        let fade = Fade::new();
        assert_eq!(fade.progress(), 0.0);
        assert!(!fade.is_running());
    }

    #[test]
    fn fade_advances_linearly_and_clamps() {
        let mut fade = Fade::new();
        fade.restart();

        assert!(fade.advance(Duration::from_millis(250)));
        assert!((fade.progress() - 0.5).abs() < 1e-3);

        assert!(fade.advance(Duration::from_millis(1_000)));
        assert_eq!(fade.progress(), 1.0);
        assert!(!fade.is_running());

        // Finished animation ignores further ticks
        assert!(!fade.advance(Duration::from_millis(50)));
    }

    #[test]
    fn fade_idle_ignores_ticks() {
        let mut fade = Fade::new();
        assert!(!fade.advance(Duration::from_millis(100)));
        assert_eq!(fade.progress(), 0.0);
    }

    #[test]
    fn scroll_saturates_at_both_ends() {
        let mut scroll = Scroll::new();
        scroll.down();
        assert_eq!(scroll.offset_from_end(), 0);

        scroll.up(2);
        scroll.up(2);
        scroll.up(2);
        assert_eq!(scroll.offset_from_end(), 2);

        scroll.to_end();
        assert_eq!(scroll.offset_from_end(), 0);
    }

    #[test]
    fn scroll_up_on_empty_list_is_noop() {
        let mut scroll = Scroll::new();
        scroll.up(0);
        assert_eq!(scroll.offset_from_end(), 0);
    }

    #[test]
    fn exit_prompt_defaults_to_cancel_and_toggles() {
        let mut prompt = ExitPrompt::new();
        assert_eq!(prompt.selected(), ExitChoice::Cancel);

        prompt.toggle();
        assert_eq!(prompt.selected(), ExitChoice::Yes);

        prompt.toggle();
        assert_eq!(prompt.selected(), ExitChoice::Cancel);
    }
}
