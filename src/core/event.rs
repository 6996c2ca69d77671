//! # Events
//!
//! Everything that can happen to the app becomes an `Event`.
//! The animation timer fires? That's `Event::Tick`.
//! The API answers? That's `Event::FetchSucceeded(timings)`.
//!
//! Three producers push events into one channel (ticker, fetch task,
//! terminal reader). The runtime applies them one at a time, in order.

use crate::fetch::{FetchError, PrayerTimes};

/// A key press, already translated from terminal-specific key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    CtrlC,
    Esc,
    Other,
}

impl Key {
    /// `q` and Ctrl+C end the session.
    pub fn is_quit(self) -> bool {
        matches!(self, Key::Char('q') | Key::CtrlC)
    }
}

#[derive(Debug)]
pub enum Event {
    /// One animation frame has elapsed.
    Tick,
    KeyPress(Key),
    Resize(u16, u16),
    FetchSucceeded(PrayerTimes),
    FetchFailed(FetchError),
}
