//! # Commands
//!
//! `update()` never performs effects. It returns a `Command` describing
//! what the runtime should do next; the runtime feeds the results back
//! in as events.
//!
//! ```text
//! App + Event  →  update()  →  Command  →  runtime  →  Event ...
//! ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
    /// Arm the ticker for exactly one future `Event::Tick`.
    ScheduleTick,
    /// Spawn the fetch task. Ignored if one was already started.
    StartFetch,
    Batch(Vec<Command>),
}

impl Command {
    pub fn batch(commands: impl IntoIterator<Item = Command>) -> Self {
        Command::Batch(commands.into_iter().collect())
    }
}
