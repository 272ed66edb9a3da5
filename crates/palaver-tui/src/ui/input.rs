//! Input row
//!
//! Text field with placeholder plus the send button. The block cursor
//! tracks the draft's char index.

use palaver_app::{ChatScreen, Clock};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

const SEND_WIDTH: u16 = 10;
const TEXT_INSET: u16 = 1; // inside the field border
const PLACEHOLDER: &str = "Type a message...";

const PLACEHOLDER_FG: Color = Color::Rgb(0x88, 0x88, 0x88);
const SEND_ENABLED_BG: Color = Color::Rgb(0x34, 0x98, 0xdb);
const SEND_DISABLED_BG: Color = Color::Rgb(0xcc, 0xcc, 0xcc);

/// Render the input row.
pub fn render<C: Clock>(frame: &mut Frame, screen: &ChatScreen<C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SEND_WIDTH)])
        .split(area);

    let [field_area, send_area] = chunks.as_ref() else {
        return;
    };

    let draft = screen.draft();
    let field_block = Block::default().borders(Borders::ALL);
    let field = if draft.text().is_empty() {
        Paragraph::new(Span::styled(PLACEHOLDER, Style::default().fg(PLACEHOLDER_FG)))
            .block(field_block)
    } else {
        Paragraph::new(draft.text().to_owned())
            .style(Style::default().fg(Color::White))
            .block(field_block)
    };
    frame.render_widget(field, *field_area);

    let send_bg = if screen.send_enabled() { SEND_ENABLED_BG } else { SEND_DISABLED_BG };
    let send = Paragraph::new(Span::styled(
        "Send",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).style(Style::default().bg(send_bg)));
    frame.render_widget(send, *send_area);

    // Cursor in the field; hidden while the exit prompt is up
    if screen.exit_prompt().is_none() {
        let available = field_area.width.saturating_sub(TEXT_INSET * 2 + 1);
        let cursor_offset = (draft.cursor() as u16).min(available);
        let cursor_x = field_area.x.saturating_add(TEXT_INSET).saturating_add(cursor_offset);
        let cursor_y = field_area.y.saturating_add(TEXT_INSET);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
