//! # Spinner
//!
//! The loading animation: a fixed cycle of glyphs that restarts after the
//! last frame. Advancing is pure; *when* to advance is the runtime's
//! business (one `Tick` per frame interval).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerStyle {
    #[default]
    Globe,
    Moon,
    Dot,
    Line,
}

impl SpinnerStyle {
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Globe => &["🌍", "🌎", "🌏"],
            SpinnerStyle::Moon => &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
            SpinnerStyle::Dot => &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"],
            SpinnerStyle::Line => &["|", "/", "-", "\\"],
        }
    }
}

/// Position within a spinner cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spinner {
    style: SpinnerStyle,
    index: usize,
}

impl Spinner {
    pub fn new(style: SpinnerStyle) -> Self {
        Self { style, index: 0 }
    }

    /// Advances one frame, wrapping to the first after the last.
    pub fn next_frame(self) -> Self {
        let len = self.style.frames().len();
        Self {
            style: self.style,
            index: (self.index + 1) % len,
        }
    }

    pub fn frame(&self) -> &'static str {
        self.style.frames()[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Delay between two frames at the given rate. A rate of 0 is treated as 1.
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}
