//! The event loop.
//!
//! Three producers push into one unbounded channel:
//! - the input reader thread (`KeyPress`, `Resize`)
//! - one-shot tick tasks (`Tick`)
//! - the fetch task (`FetchSucceeded` / `FetchFailed`)
//!
//! The loop is the only consumer. It applies events one at a time through
//! `update()`, executes the returned command, and redraws. `App` never
//! leaves the loop, so nothing needs a lock.
//!
//! ```text
//!  input ─┐
//!  tick  ─┼─► channel ─► update() ─► dispatch(Command) ─► tick / fetch tasks
//!  fetch ─┘                 │
//!                           └──────► Surface::present()
//! ```

use std::io;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;

use crate::core::command::Command;
use crate::core::event::Event;
use crate::core::state::App;
use crate::core::update::{init, update};
use crate::fetch::FetchBackend;
use crate::tui::theme::Theme;
use crate::tui::view;

/// Something that accepts rendered frames. The real terminal in
/// production, a recorder in tests.
pub trait Surface {
    fn present(&mut self, app: &App, theme: &Theme) -> io::Result<()>;
}

impl Surface for ratatui::DefaultTerminal {
    fn present(&mut self, app: &App, theme: &Theme) -> io::Result<()> {
        self.draw(|frame| view::render(frame, app, theme))?;
        Ok(())
    }
}

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user asked to quit.
    Quit,
    /// The fetch failed; carries the diagnostic.
    Failed(String),
}

pub struct Runtime {
    app: App,
    theme: Theme,
    backend: Arc<dyn FetchBackend>,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
    fetch_task: Option<AbortHandle>,
    /// At most one tick is ever in flight.
    tick_task: Option<AbortHandle>,
}

impl Runtime {
    pub fn new(app: App, theme: Theme, backend: Arc<dyn FetchBackend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            app,
            theme,
            backend,
            tx,
            rx,
            fetch_task: None,
            tick_task: None,
        }
    }

    /// A handle producers use to feed the loop.
    pub fn sender(&self) -> UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Runs until a `Quit` command. Consumes the runtime: the channel is
    /// closed on return, so late producer sends fail quietly. Producer
    /// tasks are aborted on every exit, including a failed draw.
    pub async fn run<S: Surface>(mut self, surface: &mut S) -> io::Result<Outcome> {
        info!("Event loop starting (backend: {})", self.backend.name());

        let result = self.event_loop(surface).await;
        self.shutdown();
        result?;

        Ok(match self.app.error.take() {
            Some(message) => Outcome::Failed(message),
            None => Outcome::Quit,
        })
    }

    async fn event_loop<S: Surface>(&mut self, surface: &mut S) -> io::Result<()> {
        let mut quit = self.dispatch(init());
        surface.present(&self.app, &self.theme)?;

        while !quit {
            let Some(event) = self.rx.recv().await else {
                warn!("Event channel closed unexpectedly");
                break;
            };
            debug!("Event loop received: {:?}", event);

            if matches!(event, Event::Tick) {
                self.tick_task = None;
            }
            let command = update(&mut self.app, event);
            quit = self.dispatch(command);
            surface.present(&self.app, &self.theme)?;
        }
        Ok(())
    }

    /// Executes a command. Returns true if it (or anything in a batch)
    /// asked to quit; commands after a `Quit` in a batch are skipped.
    fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::None => false,
            Command::Quit => true,
            Command::ScheduleTick => {
                self.schedule_tick();
                false
            }
            Command::StartFetch => {
                self.start_fetch();
                false
            }
            Command::Batch(commands) => commands.into_iter().any(|c| self.dispatch(c)),
        }
    }

    fn schedule_tick(&mut self) {
        if self.tick_task.is_some() {
            debug!("Tick already pending, not scheduling another");
            return;
        }
        let tx = self.tx.clone();
        let interval = self.theme.tick_interval();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            if tx.send(Event::Tick).is_err() {
                debug!("Tick dropped: event loop gone");
            }
        });
        self.tick_task = Some(handle.abort_handle());
    }

    fn start_fetch(&mut self) {
        if self.fetch_task.is_some() {
            debug!("Fetch already started, ignoring StartFetch");
            return;
        }
        info!("Spawning fetch via {}", self.backend.name());

        let backend = self.backend.clone();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let event = match backend.fetch().await {
                Ok(timings) => Event::FetchSucceeded(timings),
                Err(e) => Event::FetchFailed(e),
            };
            if tx.send(event).is_err() {
                warn!("Fetch result dropped: event loop gone");
            }
        });
        self.fetch_task = Some(handle.abort_handle());
    }

    /// Abandons every producer task without waiting on it.
    fn shutdown(&mut self) {
        if let Some(handle) = self.tick_task.take() {
            handle.abort();
        }
        // Keep the fetch handle's slot occupied: a finished runtime never fetches again.
        if let Some(handle) = &self.fetch_task {
            handle.abort();
        }
        info!("Event loop stopped");
    }
}
