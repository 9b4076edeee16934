//! Screens
//!
//! One renderer per quiz state. Each draws into a buffer from the display
//! state alone; none of them talk to the Conductor.

pub mod calculating;
pub mod question;
pub mod result;
pub mod start;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use wizai_conductor::{Catalog, QuizState};

use crate::display::DisplayState;
use crate::widgets::TextBlockState;

/// Widest the content column gets on large terminals
pub const MAX_COLUMN_WIDTH: u16 = 80;

/// Presentation state owned by the TUI
#[derive(Debug, Default)]
pub struct ScreenState {
    /// Scroll position of the result report
    pub result_scroll: TextBlockState,
    /// Frame counter driving the spinner
    pub tick: u64,
}

/// Draw the screen for the current state
pub fn render(
    area: Rect,
    buf: &mut Buffer,
    display: &DisplayState,
    screen: &mut ScreenState,
    catalog: &Catalog,
) {
    match display.state {
        QuizState::Start => start::render(area, buf, display),
        QuizState::InProgress => question::render(area, buf, display),
        QuizState::Calculating => calculating::render(area, buf, display, screen.tick),
        QuizState::Result => result::render(area, buf, display, screen, catalog),
    }
}

/// A centered column at most `width` wide
pub fn column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

/// Next row down from `rect`, clipped to it; zero height once it runs out
pub fn take_rows(rect: &mut Rect, rows: u16) -> Rect {
    let rows = rows.min(rect.height);
    let taken = Rect::new(rect.x, rect.y, rect.width, rows);
    rect.y += rows;
    rect.height -= rows;
    taken
}
