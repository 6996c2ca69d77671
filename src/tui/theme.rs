//! Colors and display settings for one session.
//!
//! Built once at startup from the resolved config and passed by reference
//! to the renderer and the ticker. There is no global style state.

use std::str::FromStr;
use std::time::Duration;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::{
    DEFAULT_ACCENT_COLOR, DEFAULT_HEADER_COLOR, DEFAULT_HELP_COLOR, DisplaySettings,
};
use crate::core::spinner::{SpinnerStyle, frame_interval};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub accent: Color,
    pub help: Color,
    pub header: Color,
    pub fps: u32,
    pub spinner: SpinnerStyle,
    pub extended: bool,
    pub centered: bool,
}

impl Theme {
    pub fn from_display(display: &DisplaySettings) -> Self {
        Self {
            accent: parse_color(&display.accent_color, DEFAULT_ACCENT_COLOR),
            help: parse_color(&display.help_color, DEFAULT_HELP_COLOR),
            header: parse_color(&display.header_color, DEFAULT_HEADER_COLOR),
            fps: display.fps,
            spinner: display.spinner,
            extended: display.extended,
            centered: display.centered,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        frame_interval(self.fps)
    }

    pub fn spinner_style(&self) -> Style {
        Style::new().fg(self.accent)
    }

    pub fn help_style(&self) -> Style {
        Style::new().fg(self.help)
    }

    pub fn header_style(&self) -> Style {
        Style::new().fg(self.header).add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::new().fg(Color::Red).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_display(&DisplaySettings::default())
    }
}

/// Accepts color names, ANSI indices ("69") and hex ("#FAFAFA").
/// Anything else logs a warning and falls back.
fn parse_color(value: &str, fallback: &str) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        warn!("Invalid color {:?}, using {:?}", value, fallback);
        Color::from_str(fallback).unwrap_or(Color::Reset)
    })
}
