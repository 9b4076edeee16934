//! Reusable widgets

pub mod report;
pub mod text_block;

pub use report::{ReportView, REPORT_FOOTER};
pub use text_block::{render_lines, wrap_text, TextBlock, TextBlockState};
