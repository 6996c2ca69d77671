//! # Update
//!
//! The reducer: the only place `App` changes.
//!
//! ```text
//! Resize(w, h)          → viewport updated         → None
//! KeyPress(q | ctrl+c)  → unchanged                → Quit
//! KeyPress(other)       → unchanged                → None
//! Tick                  → spinner advanced         → ScheduleTick
//! FetchSucceeded(t)     → timings set, not loading → None   (while loading)
//! FetchFailed(e)        → error recorded           → Quit   (while loading)
//! Fetch* after load     → ignored                  → None
//! ```
//!
//! This makes everything testable: feed events, assert on the state and
//! on the returned command. No terminal, no network.

use log::{debug, info, warn};

use crate::core::command::Command;
use crate::core::event::Event;
use crate::core::state::App;

/// Startup command: start animating and fetching at the same time.
/// The first loading frame must never wait on the network.
pub fn init() -> Command {
    Command::batch([Command::ScheduleTick, Command::StartFetch])
}

pub fn update(app: &mut App, event: Event) -> Command {
    match event {
        Event::Resize(width, height) => {
            app.viewport_width = width;
            app.viewport_height = height;
            Command::None
        }
        Event::KeyPress(key) if key.is_quit() => {
            info!("Quit requested via {:?}", key);
            Command::Quit
        }
        Event::KeyPress(_) => Command::None,
        Event::Tick => {
            app.spinner = app.spinner.next_frame();
            Command::ScheduleTick
        }
        Event::FetchSucceeded(timings) => {
            if !app.is_loading || app.error.is_some() {
                debug!("Ignoring late fetch result, session already settled");
                return Command::None;
            }
            info!("Prayer times loaded");
            app.timings = Some(timings);
            app.is_loading = false;
            Command::None
        }
        Event::FetchFailed(err) => {
            if !app.is_loading || app.error.is_some() {
                debug!("Ignoring late fetch failure: {}", err);
                return Command::None;
            }
            warn!("Fetch failed: {}", err);
            app.error = Some(err.to_string());
            Command::Quit
        }
    }
}
