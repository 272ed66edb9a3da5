//! Exit confirmation dialog
//!
//! Blocking modal: it resolves only through an explicit choice, never by
//! interacting outside it.

use palaver_app::{ChatScreen, Clock, ExitChoice};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 5;
const ACCENT: Color = Color::Rgb(0x34, 0x98, 0xdb);

/// Render the exit confirmation over the given screen area.
pub fn render<C: Clock>(frame: &mut Frame, screen: &ChatScreen<C>, area: Rect) {
    let Some(prompt) = screen.exit_prompt() else {
        return;
    };

    let dialog = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, dialog);

    let selected = prompt.selected();
    let button = |label: &str, active: bool| {
        let style = if active {
            Style::default().bg(ACCENT).fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let body = vec![
        Line::from("Are you sure you want to exit the chat?").alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            button("Cancel", selected == ExitChoice::Cancel),
            Span::raw("   "),
            button("Yes", selected == ExitChoice::Yes),
        ])
        .alignment(Alignment::Center),
    ];

    let paragraph =
        Paragraph::new(body).block(Block::default().borders(Borders::ALL).title(" Exit Chat "));
    frame.render_widget(paragraph, dialog);
}

/// Center a fixed-size rectangle inside `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x.saturating_add(area.width.saturating_sub(w) / 2);
    let y = area.y.saturating_add(area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
