//! Report Export
//!
//! The export seam between the Conductor and whatever can draw a result
//! report. An exporter does two things: capture the report as an image,
//! then lay that image out on pages. [`export_report`] runs both steps and
//! writes the document to disk.
//!
//! The core never draws. Surfaces provide a [`ReportExporter`] that knows
//! how to render their own widgets off screen.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, Category, CategoryProfile};

/// File name prefix for exported documents
pub const EXPORT_FILE_PREFIX: &str = "wizai_diagnosis_";

/// Default page width (A4)
pub const DEFAULT_PAGE_WIDTH_MM: u32 = 210;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: u32 = 2;

/// Everything needed to draw one result report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultReport {
    /// Winning category
    pub category: Category,
    /// Nickname the report is addressed to
    pub nickname: String,
    /// Profile text for the category
    pub profile: &'static CategoryProfile,
}

impl ResultReport {
    /// Assemble the report for `category`
    #[must_use]
    pub fn new(catalog: &Catalog, category: Category, nickname: impl Into<String>) -> Self {
        Self {
            category,
            nickname: nickname.into(),
            profile: catalog.profile(category),
        }
    }
}

/// A captured report: fixed-width rows of rendered cells
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedImage {
    /// Width in cells
    pub width: u16,
    /// One entry per row, top to bottom
    pub rows: Vec<String>,
}

impl RenderedImage {
    /// Height in rows
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing was captured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// How tall each page is
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageHeight {
    /// One page, as tall as the content
    #[default]
    FitContent,
    /// Fixed height in millimetres; content flows over several pages
    Fixed(u32),
}

/// Page layout for an exported document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width in millimetres
    pub width_mm: u32,
    /// Page height policy
    pub height: PageHeight,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_PAGE_WIDTH_MM,
            height: PageHeight::FitContent,
        }
    }
}

impl PageGeometry {
    /// Rows that fit on one page when the image is `columns` cells wide
    ///
    /// The image is scaled to the page width, so a cell is
    /// `width_mm / columns` wide and [`CELL_ASPECT`] times that tall.
    /// `None` means everything goes on a single page.
    #[must_use]
    pub fn rows_per_page(&self, columns: u16) -> Option<usize> {
        match self.height {
            PageHeight::FitContent => None,
            PageHeight::Fixed(height_mm) => {
                if self.width_mm == 0 || columns == 0 {
                    return None;
                }
                let rows = (u64::from(height_mm) * u64::from(columns))
                    / (u64::from(self.width_mm) * u64::from(CELL_ASPECT));
                Some(usize::try_from(rows).unwrap_or(usize::MAX).max(1))
            }
        }
    }
}

/// A finished document, ready to be written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportDocument {
    /// File extension without the dot
    pub extension: &'static str,
    /// Number of pages
    pub pages: usize,
    /// Encoded contents
    pub bytes: Vec<u8>,
}

/// Export failures
///
/// None of these are fatal: the result screen stays up and the user can try
/// again.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to capture (the report view is not available)
    #[error("report view is not available for capture")]
    RenderUnavailable,

    /// Capturing the report failed
    #[error("failed to render report: {0}")]
    Render(String),

    /// Laying out the document failed
    #[error("failed to build document: {0}")]
    Document(String),

    /// Writing the document failed
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can turn a result report into a document
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Exporter name for logs
    fn name(&self) -> &str;

    /// Capture the report as an image
    async fn render_region(&self, report: &ResultReport) -> Result<RenderedImage, ExportError>;

    /// Lay the image out on pages
    async fn build_document(
        &self,
        image: RenderedImage,
        geometry: &PageGeometry,
    ) -> Result<ExportDocument, ExportError>;
}

/// File name for an exported report of `category`
#[must_use]
pub fn export_file_name(category: Category, extension: &str) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.{extension}", category.id())
}

/// Render, lay out and write a report
///
/// Creates `output_dir` if needed. Returns the path written.
///
/// # Errors
///
/// Returns the first [`ExportError`] from either exporter step or from the
/// filesystem. Nothing is written unless both steps succeed.
pub async fn export_report<E: ReportExporter + ?Sized>(
    exporter: &E,
    report: &ResultReport,
    geometry: &PageGeometry,
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let image = exporter.render_region(report).await?;
    tracing::debug!(
        exporter = exporter.name(),
        width = image.width,
        rows = image.height(),
        "Report captured"
    );

    let document = exporter.build_document(image, geometry).await?;

    tokio::fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(export_file_name(report.category, document.extension));
    tokio::fs::write(&path, &document.bytes).await?;

    tracing::info!(
        path = %path.display(),
        pages = document.pages,
        bytes = document.bytes.len(),
        "Report exported"
    );
    Ok(path)
}
