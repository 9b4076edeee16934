//! Theme and Colors
//!
//! The WIZAI palette: a dark slate backdrop with a cyan/purple/pink neon
//! trio for chrome, plus per-category colors taken from the catalog.

use ratatui::style::{Color, Modifier, Style};

use wizai_conductor::{NotifyLevel, Rgb};

// ============================================================================
// Chrome
// ============================================================================

/// Primary neon accent (badges, progress)
pub const NEON_CYAN: Color = Color::Rgb(34, 211, 238);

/// Secondary neon accent (titles)
pub const NEON_PURPLE: Color = Color::Rgb(192, 132, 252);

/// Tertiary neon accent (start button, highlights)
pub const NEON_PINK: Color = Color::Rgb(244, 114, 182);

/// Default body text
pub const TEXT: Color = Color::Rgb(226, 232, 240);

/// System/dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 116, 139);

/// Panel borders
pub const BORDER: Color = Color::Rgb(51, 65, 85);

/// Selected option background
pub const SELECTION_BG: Color = Color::Rgb(30, 41, 59);

// ============================================================================
// Notification colors
// ============================================================================

/// Error red
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Warning amber
pub const WARNING_AMBER: Color = Color::Rgb(251, 191, 36);

/// Success green
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// Convert a catalog color to a terminal color
#[must_use]
pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Linear blend between two catalog colors, `step` of `steps`
///
/// Used to fake the result cover's gradient one row at a time.
#[must_use]
pub fn blend(from: Rgb, to: Rgb, step: usize, steps: usize) -> Color {
    if steps <= 1 {
        return rgb(from);
    }
    let t = step.min(steps - 1) as f32 / (steps - 1) as f32;
    let mix = |a: u8, b: u8| -> u8 {
        let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
        value.round().clamp(0.0, 255.0) as u8
    };
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Style for a notification toast
#[must_use]
pub fn notify_style(level: NotifyLevel) -> Style {
    let fg = match level {
        NotifyLevel::Info => NEON_CYAN,
        NotifyLevel::Warning => WARNING_AMBER,
        NotifyLevel::Error => ERROR_RED,
        NotifyLevel::Success => SUCCESS_GREEN,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let from = Rgb(0, 100, 200);
        let to = Rgb(200, 100, 0);
        assert_eq!(blend(from, to, 0, 5), Color::Rgb(0, 100, 200));
        assert_eq!(blend(from, to, 4, 5), Color::Rgb(200, 100, 0));
        assert_eq!(blend(from, to, 2, 5), Color::Rgb(100, 100, 100));
    }

    #[test]
    fn test_blend_single_step_is_start_color() {
        assert_eq!(blend(Rgb(1, 2, 3), Rgb(9, 9, 9), 0, 1), Color::Rgb(1, 2, 3));
    }
}
