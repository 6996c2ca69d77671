//! # TUI Adapter
//!
//! The ratatui/crossterm layer. Owns the terminal, maps raw input to core
//! events, renders `App`, and runs the event loop.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Lifecycle
//!
//! 1. Take over the terminal (raw mode, alternate screen).
//! 2. Report the initial terminal size as a `Resize` event.
//! 3. Start the input reader thread.
//! 4. Run the event loop until `Quit`.
//! 5. Restore the terminal, even if the loop failed.

pub mod input;
pub mod runtime;
pub mod theme;
pub mod view;

use std::sync::Arc;

use log::{info, warn};

use crate::core::event::Event;
use crate::core::state::App;
use crate::fetch::FetchBackend;
use crate::tui::runtime::{Outcome, Runtime};
use crate::tui::theme::Theme;

pub async fn run(theme: Theme, backend: Arc<dyn FetchBackend>) -> std::io::Result<Outcome> {
    let app = App::new(theme.spinner);
    let runtime = Runtime::new(app, theme, backend);
    let tx = runtime.sender();

    let mut terminal = ratatui::try_init()?;
    info!("Terminal initialized");

    match crossterm::terminal::size() {
        Ok((width, height)) => {
            let _ = tx.send(Event::Resize(width, height));
        }
        Err(e) => warn!("Could not read terminal size: {}", e),
    }
    input::spawn_input_reader(tx);

    let result = runtime.run(&mut terminal).await;

    ratatui::restore();
    info!("Terminal restored");
    result
}
