//! Calculating screen: spinner while the pacing delay runs

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Gauge, Widget};

use crate::display::DisplayState;
use crate::theme;

use super::{column, take_rows};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Spinner glyph for frame `tick`
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

pub fn render(area: Rect, buf: &mut Buffer, display: &DisplayState, tick: u64) {
    let mut rest = column(area, 40);
    take_rows(&mut rest, area.height.saturating_sub(5) / 2);

    Line::styled(
        format!("{}  {}  {}", spinner_frame(tick), spinner_frame(tick + 2), spinner_frame(tick + 4)),
        Style::default().fg(theme::NEON_CYAN),
    )
    .centered()
    .render(take_rows(&mut rest, 1), buf);
    take_rows(&mut rest, 1);

    Line::styled(
        "PROCESSING...",
        Style::default()
            .fg(theme::NEON_PURPLE)
            .add_modifier(Modifier::BOLD),
    )
    .centered()
    .render(take_rows(&mut rest, 1), buf);
    take_rows(&mut rest, 1);

    Gauge::default()
        .gauge_style(Style::default().fg(theme::NEON_PINK).bg(theme::SELECTION_BG))
        .ratio(display.calculating_progress().clamp(0.0, 1.0))
        .label("")
        .use_unicode(true)
        .render(take_rows(&mut rest, 1), buf);
}
