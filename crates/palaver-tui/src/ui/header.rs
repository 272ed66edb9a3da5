//! Header bar
//!
//! Solid colored bar with the screen title and the close control.

use palaver_app::{ChatScreen, Clock};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const CLOSE_HINT_WIDTH: u16 = 4;

/// Render the header bar.
pub fn render<C: Clock>(frame: &mut Frame, screen: &ChatScreen<C>, area: Rect) {
    let color = screen.config().header_color;
    let bg = Color::Rgb(color.r, color.g, color.b);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(CLOSE_HINT_WIDTH)])
        .split(area);

    let [title_area, close_area] = chunks.as_ref() else {
        return;
    };

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            screen.config().title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]))
    .style(Style::default().bg(bg));
    frame.render_widget(title, *title_area);

    // Close control; Esc triggers it
    let close = Paragraph::new(Span::styled(
        "X",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .style(Style::default().bg(bg));
    frame.render_widget(close, *close_area);
}
