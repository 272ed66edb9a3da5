//! Scenario tests for the chat screen state machine.
//!
//! # Oracle Pattern
//!
//! Each test drives the public API the way the runtime would and ends with
//! oracle checks on the observable state: message log contents, draft
//! survival, scroll position.

use palaver_app::{
    ChatScreen, ExitChoice, FixedClock, KeyInput, ScreenConfig, ScreenEvent, WallTime,
};

/// Create a screen mounted with a clock frozen at `hour:minute`.
fn screen_at(hour: u8, minute: u8) -> ChatScreen<FixedClock> {
    ChatScreen::new(ScreenConfig::default(), FixedClock::at(hour, minute))
}

/// Set the draft and send it.
fn send_text(screen: &mut ChatScreen<FixedClock>, text: &str) {
    screen.set_draft(text);
    let _ = screen.send();
}

/// Press a single key.
fn press(screen: &mut ChatScreen<FixedClock>, key: KeyInput) {
    let _ = screen.handle(ScreenEvent::Key(key));
}

#[test]
fn send_hello_at_14_05() {
    let mut screen = screen_at(14, 5);
    send_text(&mut screen, "Hello");

    assert_eq!(screen.messages().len(), 1);
    assert_eq!(screen.messages()[0].text, "Hello");
    assert_eq!(screen.messages()[0].time, "14:05");
    assert_eq!(screen.draft().text(), "");
}

#[test]
fn hour_nine_is_zero_padded() {
    let mut screen = screen_at(9, 5);
    send_text(&mut screen, "early");

    assert_eq!(screen.messages()[0].time, "09:05");
    assert_eq!(screen.messages()[0].time.len(), 5);
}

#[test]
fn timestamps_track_the_clock() {
    let mut screen = screen_at(14, 5);
    send_text(&mut screen, "first");

    screen.clock().set(WallTime { millis: 99_000_000, hour: 15, minute: 30 });
    send_text(&mut screen, "second");

    assert_eq!(screen.messages()[0].time, "14:05");
    assert_eq!(screen.messages()[1].time, "15:30");
}

#[test]
fn display_order_is_send_order() {
    let mut screen = screen_at(14, 5);
    for text in ["a", "b", "c"] {
        send_text(&mut screen, text);
    }

    let texts: Vec<_> = screen.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["a", "b", "c"]);
}

#[test]
fn whitespace_only_send_is_a_noop() {
    let mut screen = screen_at(14, 5);
    screen.set_draft("   ");

    assert!(!screen.send_enabled());
    let actions = screen.send();
    assert!(actions.is_empty());
    assert!(screen.messages().is_empty());
}

#[test]
fn three_sends_then_confirmed_exit_empties_the_list() {
    let mut screen = screen_at(14, 5);
    for text in ["one", "two", "three"] {
        send_text(&mut screen, text);
    }
    assert_eq!(screen.messages().len(), 3);

    let _ = screen.request_close();
    assert!(screen.exit_prompt().is_some());

    let _ = screen.resolve_exit(ExitChoice::Yes);
    assert!(screen.exit_prompt().is_none());
    assert!(screen.messages().is_empty());
}

#[test]
fn canceled_exit_leaves_messages_unchanged() {
    let mut screen = screen_at(14, 5);
    for text in ["one", "two"] {
        send_text(&mut screen, text);
    }

    let _ = screen.request_close();
    let _ = screen.resolve_exit(ExitChoice::Cancel);

    assert_eq!(screen.messages().len(), 2);
}

#[test]
fn confirmed_exit_keeps_the_draft() {
    let mut screen = screen_at(14, 5);
    send_text(&mut screen, "gone soon");
    screen.set_draft("still here");

    let _ = screen.request_close();
    let _ = screen.resolve_exit(ExitChoice::Yes);

    assert_eq!(screen.draft().text(), "still here");
}

#[test]
fn ids_remain_strictly_increasing_across_a_clear() {
    let mut screen = screen_at(14, 5);
    send_text(&mut screen, "a");
    send_text(&mut screen, "b");
    let last_before_clear = screen.messages()[1].id;

    let _ = screen.request_close();
    let _ = screen.resolve_exit(ExitChoice::Yes);
    send_text(&mut screen, "c");

    assert!(screen.messages()[0].id > last_before_clear);
}

#[test]
fn send_snaps_a_scrolled_list_back_to_the_end() {
    let mut screen = screen_at(14, 5);
    for text in ["a", "b", "c", "d"] {
        send_text(&mut screen, text);
    }

    press(&mut screen, KeyInput::Up);
    press(&mut screen, KeyInput::Up);
    assert_eq!(screen.scroll().offset_from_end(), 2);

    send_text(&mut screen, "e");
    assert_eq!(screen.scroll().offset_from_end(), 0);
}

#[test]
fn scroll_requests_before_any_message_exist_are_safe() {
    let mut screen = screen_at(14, 5);

    press(&mut screen, KeyInput::Up);
    press(&mut screen, KeyInput::Down);
    let _ = screen.handle(ScreenEvent::FocusGained);
    let _ = screen.handle(ScreenEvent::FocusLost);

    assert_eq!(screen.scroll().offset_from_end(), 0);
    assert!(screen.messages().is_empty());
}
