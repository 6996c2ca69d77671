//! # Application State
//!
//! ```text
//! App
//! ├── viewport_width: u16          // last known terminal width
//! ├── viewport_height: u16         // last known terminal height
//! ├── is_loading: bool             // true until timings arrive
//! ├── spinner: Spinner             // animation frame, advanced by Tick
//! ├── timings: Option<PrayerTimes> // set once, never replaced
//! └── error: Option<String>        // fatal fetch failure, if any
//! ```
//!
//! State changes only happen through `update(app, event)` in update.rs.
//! The runtime owns the single `App`; producers never touch it.

use crate::core::spinner::{Spinner, SpinnerStyle};
use crate::fetch::PrayerTimes;

#[derive(Debug)]
pub struct App {
    pub viewport_width: u16,
    pub viewport_height: u16,
    pub is_loading: bool,
    pub spinner: Spinner,
    pub timings: Option<PrayerTimes>,
    /// Diagnostic for a failed fetch. The session quits right after it is set.
    pub error: Option<String>,
}

impl App {
    pub fn new(spinner: SpinnerStyle) -> Self {
        Self {
            viewport_width: 0,
            viewport_height: 0,
            is_loading: true,
            spinner: Spinner::new(spinner),
            timings: None,
            error: None,
        }
    }
}
