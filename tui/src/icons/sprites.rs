//! Sprite Definitions
//!
//! Blocky pixel art using Unicode block elements and colors.
//! Each cell has its own foreground color.

use std::collections::HashMap;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// A single colored cell in a sprite
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColoredCell {
    /// The character to display
    pub ch: char,
    /// Foreground color
    pub fg: Color,
}

impl ColoredCell {
    /// Create a new colored cell
    pub const fn new(ch: char, fg: Color) -> Self {
        Self { ch, fg }
    }

    /// Empty/transparent cell
    pub const fn empty() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }

    /// Check if cell is empty/transparent
    pub fn is_empty(&self) -> bool {
        self.ch == ' '
    }
}

/// A static picture made of colored cells
#[derive(Clone, Debug)]
pub struct Sprite {
    /// 2D grid of colored cells (row-major)
    pub cells: Vec<Vec<ColoredCell>>,
    /// Width in terminal cells
    pub width: u16,
    /// Height in terminal cells
    pub height: u16,
}

impl Sprite {
    /// Create a sprite from a grid of colored cells
    pub fn new(cells: Vec<Vec<ColoredCell>>) -> Self {
        let height = cells.len() as u16;
        let width = cells.iter().map(|row| row.len() as u16).max().unwrap_or(0);

        Self {
            cells,
            width,
            height,
        }
    }

    /// One styled line per sprite row, padded to the sprite width
    ///
    /// Transparent cells become unstyled spaces so a line background shows
    /// through them.
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.cells
            .iter()
            .map(|row| {
                let mut spans: Vec<Span<'static>> = row
                    .iter()
                    .map(|cell| {
                        if cell.is_empty() {
                            Span::raw(" ")
                        } else {
                            Span::styled(cell.ch.to_string(), Style::default().fg(cell.fg))
                        }
                    })
                    .collect();
                let pad = usize::from(self.width).saturating_sub(row.len());
                if pad > 0 {
                    spans.push(Span::raw(" ".repeat(pad)));
                }
                Line::from(spans)
            })
            .collect()
    }
}

// ============================================================================
// Sprite Builder Helpers
// ============================================================================

/// Parse a sprite definition using a color map
///
/// Format: each character in the pattern maps to a (char, Color) in the palette.
/// Special: ' ' (space) is always transparent.
///
/// Example:
/// ```ignore
/// let palette = [('H', '█', HAT), ('f', '█', SKIN), ('e', '▪', EYES)];
/// let pattern = [
///     "  HHH  ",
///     " fefef ",
///     "  fff  ",
/// ];
/// ```
pub fn build_sprite(pattern: &[&str], palette: &[(char, char, Color)]) -> Sprite {
    let color_map: HashMap<char, (char, Color)> = palette
        .iter()
        .map(|&(key, ch, color)| (key, (ch, color)))
        .collect();

    let cells: Vec<Vec<ColoredCell>> = pattern
        .iter()
        .map(|line| {
            line.chars()
                .map(|c| {
                    if c == ' ' {
                        ColoredCell::empty()
                    } else if let Some(&(ch, color)) = color_map.get(&c) {
                        ColoredCell::new(ch, color)
                    } else {
                        // Unknown char - show as-is in default color
                        ColoredCell::new(c, Color::Reset)
                    }
                })
                .collect()
        })
        .collect();

    Sprite::new(cells)
}
