//! Start screen: title, tagline and the codename field

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::display::DisplayState;
use crate::theme;
use crate::widgets::wrap_text;

use super::{column, take_rows};

const VERSION_BADGE: &str = " WIZAI PROJECT v1.2.0 ";
const TITLE: &str = "AI適性 スキル診断";
const TAGLINE: &str =
    "AI時代の働き方をハックせよ。20の質問で、あなたの隠れた才能と最強の稼ぎ方を分析します。";
const PLACEHOLDER: &str = "ニックネームを入力";
const START_BUTTON: &str = " START DIAGNOSIS ";

pub fn render(area: Rect, buf: &mut Buffer, display: &DisplayState) {
    let mut rest = column(area, 56);
    take_rows(&mut rest, area.height.saturating_sub(18) / 2);

    Line::from(Span::styled(
        VERSION_BADGE,
        Style::default().fg(Color::Black).bg(theme::NEON_CYAN),
    ))
    .centered()
    .render(take_rows(&mut rest, 1), buf);
    take_rows(&mut rest, 1);

    Line::styled(
        TITLE,
        Style::default()
            .fg(theme::NEON_PURPLE)
            .add_modifier(Modifier::BOLD),
    )
    .centered()
    .render(take_rows(&mut rest, 1), buf);
    take_rows(&mut rest, 1);

    let tagline: Vec<Line> = wrap_text(TAGLINE, usize::from(rest.width))
        .into_iter()
        .map(|row| Line::styled(row, Style::default().fg(theme::DIM_GRAY)).centered())
        .collect();
    let tagline_rows = tagline.len() as u16;
    Paragraph::new(tagline).render(take_rows(&mut rest, tagline_rows), buf);
    take_rows(&mut rest, 1);

    Line::styled("CODENAME", Style::default().fg(theme::NEON_CYAN))
        .render(take_rows(&mut rest, 1), buf);

    let typed = display.nickname.chars().count();
    let input = if display.nickname.is_empty() {
        Line::from(vec![
            Span::styled("▏", Style::default().fg(theme::NEON_PINK)),
            Span::styled(PLACEHOLDER, Style::default().fg(theme::DIM_GRAY)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                display.nickname.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(theme::NEON_PINK)),
        ])
    };
    Paragraph::new(input)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BORDER))
                .title_bottom(
                    Line::from(format!(" {typed}/{} ", display.nickname_max_chars))
                        .right_aligned(),
                ),
        )
        .render(take_rows(&mut rest, 3), buf);
    take_rows(&mut rest, 1);

    let button = if display.can_start {
        Style::default()
            .fg(Color::Black)
            .bg(theme::NEON_PINK)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::DIM_GRAY).bg(theme::SELECTION_BG)
    };
    Line::from(Span::styled(START_BUTTON, button))
        .centered()
        .render(take_rows(&mut rest, 1), buf);

    let hint = if display.can_start {
        "Enter to start"
    } else {
        "Type a codename to begin"
    };
    Line::styled(hint, Style::default().fg(theme::DIM_GRAY))
        .centered()
        .render(take_rows(&mut rest, 1), buf);
}
