//! Prayer times in the terminal: a spinner while the day's timings are
//! fetched, then a table, until you press `q`.

pub mod core;
pub mod fetch;
pub mod tui;

#[cfg(test)]
pub mod test_support;
