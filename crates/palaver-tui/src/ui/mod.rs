//! UI rendering
//!
//! Rendering functions that convert screen state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing widgets into the frame.

mod confirm;
mod header;
mod input;
mod messages;

use palaver_app::{ChatScreen, Clock};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Render the entire chat screen.
pub fn render<C: Clock>(frame: &mut Frame, screen: &ChatScreen<C>) {
    const HEADER_HEIGHT: u16 = 1;
    const LIST_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;

    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(LIST_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(area);

    let [header_area, list_area, input_area] = chunks.as_ref() else {
        return;
    };

    header::render(frame, screen, *header_area);
    messages::render(frame, screen, *list_area);
    input::render(frame, screen, *input_area);

    // The exit prompt overlays everything and blocks interaction
    if screen.exit_prompt().is_some() {
        confirm::render(frame, screen, area);
    }
}
