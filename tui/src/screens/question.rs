//! Question screen: mission progress, prompt and lettered options

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Widget};

use crate::display::DisplayState;
use crate::theme;
use crate::widgets::wrap_text;

use super::{column, take_rows, MAX_COLUMN_WIDTH};

/// Letter shown before the option at `index`
pub fn option_letter(index: usize) -> char {
    const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];
    LETTERS.get(index).copied().unwrap_or('?')
}

pub fn render(area: Rect, buf: &mut Buffer, display: &DisplayState) {
    let Some(question) = &display.question else {
        return;
    };
    let mut rest = column(area, MAX_COLUMN_WIDTH.min(64));
    take_rows(&mut rest, 1);

    // Progress header
    let header = take_rows(&mut rest, 1);
    Line::from(Span::styled(
        format!("MISSION {}", question.ordinal),
        Style::default()
            .fg(theme::NEON_CYAN)
            .add_modifier(Modifier::BOLD),
    ))
    .render(header, buf);
    Line::from(Span::styled(
        format!("GOAL {}", question.total),
        Style::default().fg(theme::DIM_GRAY),
    ))
    .right_aligned()
    .render(header, buf);

    Gauge::default()
        .gauge_style(Style::default().fg(theme::NEON_CYAN).bg(theme::SELECTION_BG))
        .percent(question.progress_percent().min(100))
        .label("")
        .use_unicode(true)
        .render(take_rows(&mut rest, 1), buf);
    take_rows(&mut rest, 1);

    // Badge + prompt
    Line::from(Span::styled(
        format!(" QUESTION {} ", question.ordinal),
        Style::default().fg(Color::Black).bg(theme::NEON_PURPLE),
    ))
    .render(take_rows(&mut rest, 1), buf);
    take_rows(&mut rest, 1);

    let prompt: Vec<Line> = wrap_text(&question.prompt, usize::from(rest.width))
        .into_iter()
        .map(|row| {
            Line::styled(
                row,
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    let prompt_rows = prompt.len() as u16;
    Paragraph::new(prompt).render(take_rows(&mut rest, prompt_rows), buf);
    take_rows(&mut rest, 1);

    // Options
    let label_width = usize::from(rest.width).saturating_sub(6);
    for (i, label) in question.options.iter().enumerate() {
        let selected = i == display.cursor;
        let (marker, letter_style, text_style) = if selected {
            (
                "▶ ",
                Style::default()
                    .fg(Color::Black)
                    .bg(theme::NEON_CYAN)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(theme::TEXT).bg(theme::SELECTION_BG),
            )
        } else {
            (
                "  ",
                Style::default().fg(theme::NEON_CYAN),
                Style::default().fg(theme::TEXT),
            )
        };

        for (row_index, row) in wrap_text(label, label_width).into_iter().enumerate() {
            let line = if row_index == 0 {
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme::NEON_PINK)),
                    Span::styled(format!(" {} ", option_letter(i)), letter_style),
                    Span::raw(" "),
                    Span::styled(row, text_style),
                ])
            } else {
                Line::from(vec![Span::raw("      "), Span::styled(row, text_style)])
            };
            line.render(take_rows(&mut rest, 1), buf);
        }
        take_rows(&mut rest, 1);
    }

    let hint = format!(
        "↑↓ + Enter, 1-{n} or a-{last} to answer",
        n = question.options.len(),
        last = option_letter(question.options.len().saturating_sub(1)).to_ascii_lowercase(),
    );
    Line::styled(hint, Style::default().fg(theme::DIM_GRAY)).render(take_rows(&mut rest, 1), buf);
}
