//! Terminal input: key mapping and the reader thread.
//!
//! The reader thread blocks on crossterm and forwards key presses and
//! resizes into the event channel. It stops once the channel is closed.

use std::thread;

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use tokio::sync::mpsc::UnboundedSender;

use crate::core::event::{Event, Key};

/// Map a crossterm key event to a core `Key`.
pub fn map_key(key: KeyEvent) -> Key {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Key::CtrlC;
    }

    match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Esc,
        _ => Key::Other,
    }
}

/// Map a crossterm event to a core `Event`. Key releases and repeats,
/// mouse, focus and paste events are dropped.
pub fn map_event(event: event::Event) -> Option<Event> {
    match event {
        event::Event::Key(key) if key.kind == KeyEventKind::Press => {
            Some(Event::KeyPress(map_key(key)))
        }
        event::Event::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

pub fn spawn_input_reader(tx: UnboundedSender<Event>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(raw) => {
                    let Some(event) = map_event(raw) else {
                        continue;
                    };
                    if tx.send(event).is_err() {
                        debug!("Input reader stopping: event loop gone");
                        break;
                    }
                }
                Err(e) => {
                    warn!("Terminal read failed, input reader stopping: {}", e);
                    break;
                }
            }
        }
    });
}
