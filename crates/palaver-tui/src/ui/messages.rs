//! Message list
//!
//! Bottom-anchored list of sent messages. Visual identity alternates by
//! index parity: even entries render as incoming (left-aligned, light
//! bubble), odd entries as outgoing (right-aligned, accent bubble). The
//! parity rule is a placeholder party marker, not an identity model.

use palaver_app::{ChatScreen, Clock, Message};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const BORDER_SIZE: u16 = 2;

const INCOMING_BG: Color = Color::Rgb(0xec, 0xf0, 0xf1);
const INCOMING_FG: Color = Color::Rgb(0x33, 0x33, 0x33);
const OUTGOING_BG: Color = Color::Rgb(0x34, 0x98, 0xdb);
const OUTGOING_FG: Color = Color::Rgb(0xff, 0xff, 0xff);
const TIME_FG: Color = Color::Rgb(0x66, 0x66, 0x66);

/// Render the message list.
pub fn render<C: Clock>(frame: &mut Frame, screen: &ChatScreen<C>, area: Rect) {
    let messages = screen.messages();

    if messages.is_empty() {
        let placeholder =
            Paragraph::new(Span::styled("No messages yet", Style::default().fg(Color::DarkGray)))
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    }

    let newest = messages.len().saturating_sub(1);
    let items: Vec<ListItem> = messages
        .iter()
        .enumerate()
        .map(|(index, message)| {
            let opacity = if index == newest && screen.fade().is_running() {
                screen.fade().progress()
            } else {
                1.0
            };
            message_item(message, index, opacity)
        })
        .collect();

    // Window anchored at the bottom, shifted up by the scroll offset
    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let end = messages.len().saturating_sub(screen.scroll().offset_from_end());
    let start = end.saturating_sub(visible_height);
    let visible: Vec<ListItem> = items.into_iter().take(end).skip(start).collect();

    let list = List::new(visible).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// One list entry: the bubble text plus its HH:MM timestamp.
fn message_item(message: &Message, index: usize, opacity: f32) -> ListItem<'static> {
    let incoming = index % 2 == 0;
    let (bg, fg) = if incoming { (INCOMING_BG, INCOMING_FG) } else { (OUTGOING_BG, OUTGOING_FG) };

    let bubble = Style::default().bg(fade(bg, opacity)).fg(fade(fg, opacity));
    let line = Line::from(vec![
        Span::styled(format!(" {} ", message.text), bubble),
        Span::raw(" "),
        Span::styled(message.time.clone(), Style::default().fg(fade(TIME_FG, opacity))),
    ]);

    let line = if incoming { line } else { line.alignment(Alignment::Right) };
    ListItem::new(line)
}

/// Linear fade towards the dark terminal background.
fn fade(color: Color, opacity: f32) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(channel(r, t), channel(g, t), channel(b, t)),
        other => other,
    }
}

fn channel(value: u8, t: f32) -> u8 {
    (f32::from(value) * t) as u8
}
