//! TextBlock Widget
//!
//! A borderless, scrollable region over pre-built lines.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{StatefulWidget, Widget};
use textwrap::wrap;

/// State for a scrollable text block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBlockState {
    /// Scroll offset (lines from top)
    pub scroll_offset: usize,
    /// Total content lines
    pub total_lines: usize,
    /// Visible lines at the last render
    pub viewport: usize,
}

impl TextBlockState {
    /// Scroll by delta (positive = down)
    pub fn scroll(&mut self, delta: i32) {
        let new_offset = self.scroll_offset as i64 + i64::from(delta);
        self.scroll_offset = new_offset.max(0) as usize;
        self.clamp();
    }

    /// Scroll by one viewport (positive = down)
    pub fn page(&mut self, pages: i32) {
        let step = self.viewport.max(1) as i32;
        self.scroll(step.saturating_mul(pages));
    }

    /// Scroll to top
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Whether there is content below the viewport
    pub fn has_more_below(&self) -> bool {
        self.scroll_offset + self.viewport < self.total_lines
    }

    fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport)
    }

    fn clamp(&mut self) {
        if self.total_lines > 0 {
            self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        }
    }
}

/// A borderless, scrollable block of lines
pub struct TextBlock<'a> {
    lines: &'a [Line<'static>],
}

impl<'a> TextBlock<'a> {
    pub fn new(lines: &'a [Line<'static>]) -> Self {
        Self { lines }
    }
}

impl StatefulWidget for TextBlock<'_> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.total_lines = self.lines.len();
        state.viewport = area.height as usize;
        state.clamp();

        render_lines(
            self.lines.iter().skip(state.scroll_offset),
            area,
            buf,
        );
    }
}

/// Draw lines top-down into `area`, one row each, honoring line alignment
/// and filling each row with the line's own style
pub fn render_lines<'a, I>(lines: I, area: Rect, buf: &mut Buffer)
where
    I: IntoIterator<Item = &'a Line<'static>>,
{
    for (i, line) in lines.into_iter().take(area.height as usize).enumerate() {
        let row = Rect::new(area.x, area.y + i as u16, area.width, 1);
        buf.set_style(row, line.style);
        line.clone().render(row, buf);
    }
}

/// Wrap text to `width` display columns, keeping blank lines
///
/// Text without spaces (Japanese prose) is broken at the column limit.
pub fn wrap_text(content: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    content
        .lines()
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                wrap(line, width)
                    .into_iter()
                    .map(|cow| cow.to_string())
                    .collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    fn numbered(n: usize) -> Vec<Line<'static>> {
        (0..n).map(|i| Line::from(format!("line {i}"))).collect()
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let lines = numbered(10);
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        let mut state = TextBlockState {
            scroll_offset: 50,
            ..Default::default()
        };

        TextBlock::new(&lines).render(area, &mut buf, &mut state);

        assert_eq!(state.scroll_offset, 6);
        assert_eq!(state.viewport, 4);
        assert!(!state.has_more_below());
        assert_eq!(buf[(0, 0)].symbol(), "l");
        assert_eq!(buf[(5, 0)].symbol(), "6");
    }

    #[test]
    fn test_page_moves_by_viewport() {
        let mut state = TextBlockState {
            scroll_offset: 0,
            total_lines: 30,
            viewport: 8,
        };
        state.page(1);
        assert_eq!(state.scroll_offset, 8);
        state.page(-5);
        assert_eq!(state.scroll_offset, 0);
        state.page(10);
        assert_eq!(state.scroll_offset, 22);
    }

    #[test]
    fn test_wrap_text_breaks_wide_prose() {
        let wrapped = wrap_text("あいうえおかきくけこ", 8);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(line.width() <= 8, "{line:?}");
        }
    }

    #[test]
    fn test_wrap_text_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }
}
