//! Clock abstraction for deterministic testing.
//!
//! Decouples the screen state machine from system time. Message ids and
//! display timestamps are derived from a [`WallTime`] read, so tests inject
//! a [`FixedClock`] while the terminal front end uses [`SystemClock`].

use std::cell::Cell;

use chrono::{Local, Timelike};

/// A wall-clock reading: epoch milliseconds plus the local hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    /// Milliseconds since the Unix epoch.
    pub millis: u64,
    /// Local hour in 24-hour form (0..=23).
    pub hour: u8,
    /// Local minute (0..=59).
    pub minute: u8,
}

impl WallTime {
    /// Display form: zero-padded 24-hour `"HH:MM"`, always five characters.
    pub fn hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Source of wall-clock readings.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> WallTime;
}

/// Production clock reading the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime {
            millis: now.timestamp_millis().max(0) as u64,
            hour: now.hour() as u8,
            minute: now.minute() as u8,
        }
    }
}

/// Deterministic clock for tests.
///
/// Returns the same [`WallTime`] until [`FixedClock::set`] changes it.
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: Cell<WallTime>,
}

impl FixedClock {
    /// Create a clock frozen at the given time.
    pub fn new(time: WallTime) -> Self {
        Self { time: Cell::new(time) }
    }

    /// Create a clock frozen at `hour:minute`, with epoch millis derived
    /// from the same pair so readings stay internally consistent.
    pub fn at(hour: u8, minute: u8) -> Self {
        let millis = (u64::from(hour) * 60 + u64::from(minute)) * 60_000;
        Self::new(WallTime { millis, hour, minute })
    }

    /// Replace the frozen time.
    pub fn set(&self, time: WallTime) {
        self.time.set(time);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> WallTime {
        self.time.get()
    }
}
