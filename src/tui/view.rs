//! Rendering: `App` → frame. Reads state, never changes it.
//!
//! Three views, picked from state alone:
//! - error recorded → one-line diagnostic
//! - still loading  → spinner frame + status text
//! - timings loaded → fixed-column table
//!
//! All three end with the same help line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Row, Table};

use crate::core::state::App;
use crate::fetch::PrayerTimes;
use crate::tui::theme::Theme;

pub const HELP_TEXT: &str = "• q/ctrl+c: exit";
pub const LOADING_TEXT: &str = "fetching prayer times for your location";

const LABEL_WIDTH: u16 = 12;
const TIME_WIDTH: u16 = 8;
const COLUMN_SPACING: u16 = 1;
/// Borders on both sides plus both columns and the gap between them.
const TABLE_WIDTH: u16 = LABEL_WIDTH + COLUMN_SPACING + TIME_WIDTH + 2;

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let bounds = viewport(app, frame.area());

    if let Some(error) = &app.error {
        let text = error_text(error, theme);
        let area = content_area(bounds, text.width() as u16, text.height() as u16, theme);
        frame.render_widget(Paragraph::new(text), area);
        return;
    }

    match &app.timings {
        Some(timings) if !app.is_loading => draw_table(frame, bounds, timings, theme),
        _ => {
            let text = loading_text(app, theme);
            let area = content_area(bounds, text.width() as u16, text.height() as u16, theme);
            frame.render_widget(Paragraph::new(text), area);
        }
    }
}

/// Spinner frame and status, then the help line.
pub fn loading_text(app: &App, theme: &Theme) -> Text<'static> {
    Text::from(vec![
        Line::from(vec![
            Span::styled(app.spinner.frame(), theme.spinner_style()),
            Span::raw(" "),
            Span::raw(LOADING_TEXT),
        ]),
        help_line(theme),
    ])
}

pub fn error_text(error: &str, theme: &Theme) -> Text<'static> {
    Text::from(vec![
        Line::from(vec![
            Span::styled("✗ ", theme.error_style()),
            Span::raw(format!("could not fetch prayer times: {error}")),
        ]),
        help_line(theme),
    ])
}

pub fn help_line(theme: &Theme) -> Line<'static> {
    Line::styled(HELP_TEXT, theme.help_style())
}

fn draw_table(frame: &mut Frame, bounds: Rect, timings: &PrayerTimes, theme: &Theme) {
    let rows: Vec<Row> = timings
        .rows(theme.extended)
        .into_iter()
        .map(|(label, time)| Row::new(vec![label, time]))
        .collect();

    // Header + rows + top and bottom border
    let table_height = rows.len() as u16 + 3;
    let area = content_area(bounds, TABLE_WIDTH.max(HELP_TEXT.len() as u16), table_height + 1, theme);
    let [table_area, help_area] =
        Layout::vertical([Constraint::Length(table_height), Constraint::Length(1)]).areas(area);

    let table = Table::new(rows, [Constraint::Length(LABEL_WIDTH), Constraint::Length(TIME_WIDTH)])
        .header(Row::new(vec!["Prayer", "Time"]).style(theme.header_style()))
        .column_spacing(COLUMN_SPACING)
        .block(Block::bordered());

    let table_area = Rect {
        width: table_area.width.min(TABLE_WIDTH),
        ..table_area
    };
    frame.render_widget(table, table_area);
    frame.render_widget(Paragraph::new(help_line(theme)), help_area);
}

/// The drawable region: the last reported terminal size, clipped to the
/// frame. Falls back to the whole frame before the first resize.
fn viewport(app: &App, area: Rect) -> Rect {
    if app.viewport_width == 0 || app.viewport_height == 0 {
        return area;
    }
    Rect::new(area.x, area.y, app.viewport_width, app.viewport_height).intersection(area)
}

/// A `width` × `height` box inside `bounds`: top-left, or centered if the
/// theme asks for it. Clipped to `bounds` either way.
fn content_area(bounds: Rect, width: u16, height: u16, theme: &Theme) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    if !theme.centered {
        return Rect::new(bounds.x, bounds.y, width, height);
    }
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(bounds);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    area
}
