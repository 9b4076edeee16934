//! Result Report Widget
//!
//! Lays a [`ResultReport`] out as a column of styled lines: gradient cover,
//! category icon, skill, the two explanation sections and the monetization
//! block. The same lines drive the on-screen result view and the exporter's
//! off-screen capture, so the file matches what the user saw.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use wizai_conductor::ResultReport;

use crate::icons::CategoryIcon;
use crate::theme::{self, blend, rgb};
use crate::widgets::text_block::{render_lines, wrap_text};

/// Footer line closing every report
pub const REPORT_FOOTER: &str = "WIZAI // AI SKILL DIAGNOSIS REPORT";

const TRAITS_HEADING: &str = "適性タイプの特徴";
const REASON_HEADING: &str = "なぜこのタイプ？";
const MONETIZATION_HEADING: &str = "適性スキルで100万円稼ぐアイデア";
const MARGIN: &str = "  ";

/// The result report, ready to lay out at any width
pub struct ReportView<'a> {
    report: &'a ResultReport,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a ResultReport) -> Self {
        Self { report }
    }

    /// Rows the report needs at `width` columns
    pub fn height(&self, width: u16) -> u16 {
        u16::try_from(self.lines(width).len()).unwrap_or(u16::MAX)
    }

    /// Lay the report out for `width` columns
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let profile = self.report.profile;
        let accent = rgb(profile.theme.accent);
        let body_width = usize::from(width).saturating_sub(MARGIN.len() * 2).max(1);

        let mut lines = self.cover(body_width);
        lines.push(Line::default());

        // Icon
        lines.extend(
            CategoryIcon::for_category(self.report.category)
                .sprite()
                .lines()
                .into_iter()
                .map(Line::centered),
        );
        lines.push(Line::default());

        // Unique skill
        lines.push(Line::styled("UNIQUE SKILL", Style::default().fg(theme::DIM_GRAY)).centered());
        lines.extend(centered(
            profile.skill,
            body_width,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::default());

        // Traits
        lines.push(heading(TRAITS_HEADING, accent));
        lines.extend(paragraph(
            profile.features_title,
            body_width,
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ));
        lines.extend(paragraph(profile.features, body_width, body_style()));
        lines.push(Line::default());

        // Reason
        lines.push(heading(REASON_HEADING, accent));
        lines.extend(paragraph(profile.reason, body_width, body_style()));
        lines.push(Line::default());

        // Monetization
        lines.push(
            Line::styled("─".repeat(body_width), Style::default().fg(theme::BORDER)).centered(),
        );
        lines.push(
            Line::from(Span::styled(
                " MONETIZATION ",
                Style::default()
                    .fg(Color::Black)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        lines.extend(centered(
            MONETIZATION_HEADING,
            body_width,
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::default());
        let mut blocks = profile.monetization.splitn(2, '\n');
        if let Some(title) = blocks.next() {
            lines.extend(paragraph(
                title,
                body_width,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(rest) = blocks.next() {
            lines.extend(paragraph(rest, body_width, body_style()));
        }
        lines.push(Line::default());

        lines.extend(centered(
            REPORT_FOOTER,
            body_width,
            Style::default().fg(theme::DIM_GRAY),
        ));
        lines
    }

    /// Cover block: addressee, alias, name and the quoted description over
    /// the category gradient
    fn cover(&self, body_width: usize) -> Vec<Line<'static>> {
        let profile = self.report.profile;
        let mut rows = vec![Line::default()];
        rows.extend(spans_centered(
            &format!("Analysis Complete for {}", self.report.nickname),
            body_width,
            Style::default().add_modifier(Modifier::DIM),
        ));
        rows.push(Line::default());
        rows.extend(spans_centered(
            &profile.alias.to_uppercase(),
            body_width,
            Style::default(),
        ));
        rows.extend(spans_centered(
            profile.name,
            body_width,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        rows.push(Line::default());
        rows.extend(spans_centered(
            &format!("\"{}\"", profile.description),
            body_width,
            Style::default(),
        ));
        rows.push(Line::default());

        let steps = rows.len();
        rows.into_iter()
            .enumerate()
            .map(|(i, line)| {
                let bg = blend(
                    profile.theme.gradient_from,
                    profile.theme.gradient_to,
                    i,
                    steps,
                );
                line.style(Style::default().fg(Color::White).bg(bg))
            })
            .collect()
    }
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        render_lines(&lines, area, buf);
    }
}

fn heading(text: &'static str, accent: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(MARGIN),
        Span::styled("▍", Style::default().fg(accent)),
        Span::styled(text, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
    ])
}

fn body_style() -> Style {
    Style::default().fg(theme::TEXT)
}

/// Wrapped, left-aligned text behind the page margin
fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|row| Line::styled(format!("{MARGIN}{row}"), style))
        .collect()
}

/// Wrapped, centered text styled at line level
fn centered(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|row| Line::styled(row, style).centered())
        .collect()
}

/// Wrapped, centered text styled at span level, leaving the line style free
/// for a background
fn spans_centered(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)).centered())
        .collect()
}
