//! Buffer Exporter
//!
//! Implements the conductor's export seam for the terminal: the report is
//! drawn into an off-screen ratatui buffer (the "capture"), read back as rows
//! of text, and laid out on fixed-width pages separated by form feeds.

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use wizai_conductor::{
    ExportDocument, ExportError, PageGeometry, PageHeight, RenderedImage, ReportExporter,
    ResultReport,
};

use crate::widgets::{ReportView, REPORT_FOOTER};

/// Narrowest capture the report layout supports
pub const MIN_RENDER_WIDTH: u16 = 20;

/// File extension of exported documents
pub const DOCUMENT_EXTENSION: &str = "txt";

const PAGE_BREAK: char = '\u{000C}';

/// Exports the result report as a paginated text document
#[derive(Clone, Debug)]
pub struct BufferExporter {
    render_width: u16,
}

impl BufferExporter {
    /// Capture reports `render_width` columns wide
    pub fn new(render_width: u16) -> Self {
        Self { render_width }
    }

    /// Capture width in columns
    pub fn render_width(&self) -> u16 {
        self.render_width
    }
}

#[async_trait]
impl ReportExporter for BufferExporter {
    fn name(&self) -> &str {
        "buffer"
    }

    async fn render_region(&self, report: &ResultReport) -> Result<RenderedImage, ExportError> {
        if self.render_width < MIN_RENDER_WIDTH {
            return Err(ExportError::RenderUnavailable);
        }

        let view = ReportView::new(report);
        let height = view.height(self.render_width);
        let area = Rect::new(0, 0, self.render_width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);

        let rows = buffer_rows(&buf);
        if rows.iter().all(String::is_empty) {
            return Err(ExportError::Render("captured report is blank".into()));
        }

        Ok(RenderedImage {
            width: self.render_width,
            rows,
        })
    }

    async fn build_document(
        &self,
        image: RenderedImage,
        geometry: &PageGeometry,
    ) -> Result<ExportDocument, ExportError> {
        if image.is_empty() {
            return Err(ExportError::Document("nothing to lay out".into()));
        }

        let chunks: Vec<&[String]> = match geometry.rows_per_page(image.width) {
            Some(rows) => image.rows.chunks(rows).collect(),
            None => vec![image.rows.as_slice()],
        };
        let pages = chunks.len();

        let mut text = String::new();
        for (i, rows) in chunks.iter().enumerate() {
            if i > 0 {
                text.push(PAGE_BREAK);
            }
            text.push_str(&page_header(geometry, i + 1, pages));
            text.push('\n');
            for row in rows.iter() {
                text.push_str(row);
                text.push('\n');
            }
        }
        text.push_str(&format!(
            "\nGenerated {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M")
        ));

        Ok(ExportDocument {
            extension: DOCUMENT_EXTENSION,
            pages,
            bytes: text.into_bytes(),
        })
    }
}

fn page_header(geometry: &PageGeometry, page: usize, pages: usize) -> String {
    let height = match geometry.height {
        PageHeight::FitContent => "fit".to_string(),
        PageHeight::Fixed(mm) => format!("{mm}mm"),
    };
    format!(
        "{REPORT_FOOTER}  [{}mm x {height}]  page {page}/{pages}",
        geometry.width_mm
    )
}

/// Read a buffer back as text, one string per row, trailing blanks trimmed
///
/// A wide glyph occupies its own cell plus hidden cells after it; those are
/// skipped so each row reads back exactly as drawn.
fn buffer_rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut row = String::new();
            let mut x = area.left();
            while x < area.right() {
                let symbol = buf[(x, y)].symbol();
                row.push_str(symbol);
                let width = symbol.width().max(1);
                x = x.saturating_add(width as u16);
            }
            row.trim_end().to_string()
        })
        .collect()
}
