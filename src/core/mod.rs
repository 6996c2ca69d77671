//! # Core Application Logic
//!
//! Everything that decides *what happens* lives here. It knows nothing
//! about terminals, HTTP, or tokio tasks.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Event (inputs)       │
//!                    │  • Command (requests)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │   Fetch    │
//!     │  runtime   │                          │  backends  │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`event`]: The `Event` enum, everything that can happen
//! - [`command`]: The `Command` enum, effects the runtime must perform
//! - [`update`]: The reducer, `(App, Event) → Command`
//! - [`spinner`]: The loading animation cycle
//! - [`config`]: Settings resolution (file → env → CLI)

pub mod command;
pub mod config;
pub mod event;
pub mod spinner;
pub mod state;
pub mod update;
