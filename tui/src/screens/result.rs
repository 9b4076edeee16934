//! Result screen: the scrollable report and its action bar

use std::path::Path;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};

use wizai_conductor::{Catalog, ResultReport};

use crate::display::DisplayState;
use crate::theme;
use crate::widgets::{ReportView, TextBlock};

use super::{column, ScreenState, MAX_COLUMN_WIDTH};

const COPYRIGHT: &str = "WIZAI PROJECT © 2024";

pub fn render(
    area: Rect,
    buf: &mut Buffer,
    display: &DisplayState,
    screen: &mut ScreenState,
    catalog: &Catalog,
) {
    let Some(result) = &display.result else {
        return;
    };
    if area.height < 3 {
        return;
    }

    let report = ResultReport::new(catalog, result.category, result.nickname.clone());
    let body = column(
        Rect::new(area.x, area.y, area.width, area.height - 2),
        MAX_COLUMN_WIDTH,
    );
    let lines = ReportView::new(&report).lines(body.width);
    TextBlock::new(&lines).render(body, buf, &mut screen.result_scroll);

    let bar = Rect::new(area.x, area.y + area.height - 2, area.width, 1);
    let save = if display.exporting {
        Span::styled(
            " Generating... ",
            Style::default().fg(theme::DIM_GRAY).bg(theme::SELECTION_BG),
        )
    } else if let Some(name) = display.last_export.as_deref().and_then(Path::file_name) {
        Span::styled(
            format!(" [s] Saved {} ", name.to_string_lossy()),
            Style::default()
                .fg(Color::Black)
                .bg(theme::SUCCESS_GREEN)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " [s] Save Report ",
            Style::default()
                .fg(Color::Black)
                .bg(theme::NEON_CYAN)
                .add_modifier(Modifier::BOLD),
        )
    };
    let more = if screen.result_scroll.has_more_below() {
        "  ↓ more"
    } else {
        ""
    };
    Line::from(vec![
        save,
        Span::raw("  "),
        Span::styled(
            " [r] Restart ",
            Style::default().fg(theme::TEXT).bg(theme::SELECTION_BG),
        ),
        Span::styled(more, Style::default().fg(theme::DIM_GRAY)),
    ])
    .centered()
    .render(bar, buf);

    Line::styled(COPYRIGHT, Style::default().fg(theme::DIM_GRAY))
        .centered()
        .render(Rect::new(bar.x, bar.y + 1, bar.width, 1), buf);
}
