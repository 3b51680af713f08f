//! Item report generation.
//!
//! Two passes: [`layout::layout_report`] places every header, row and
//! footer on A4 pages, then [`pdf::render_pdf`] serializes the result.
//! [`ReportGenerator`] ties both to a target directory and the local clock.

pub mod error;
pub mod format;
pub mod layout;
mod metrics;
pub mod pdf;
pub mod titles;

pub use error::{Error, Result};
pub use layout::{ReportBranding, ReportDocument, layout_report};
pub use titles::{DEFAULT_TITLE, FULL_REPORT_TITLE, selection_title};

use chrono::{Local, NaiveDateTime};
use itemreg_types::Item;
use std::path::{Path, PathBuf};

/// Writes item reports as `relatorio_itens_<DD-MM-YYYY>.pdf` into one directory
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
    branding: ReportBranding,
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            branding: ReportBranding::default(),
        }
    }

    pub fn with_branding(mut self, branding: ReportBranding) -> Self {
        self.branding = branding;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generate a report stamped with the current local time
    pub fn generate(&self, items: &[&Item], title: &str) -> Result<PathBuf> {
        self.generate_at(items, title, Local::now().naive_local())
    }

    /// Generate a report as if produced at `generated_at`.
    ///
    /// A report from the same day overwrites the previous file.
    pub fn generate_at(
        &self,
        items: &[&Item],
        title: &str,
        generated_at: NaiveDateTime,
    ) -> Result<PathBuf> {
        let document = layout_report(items, title, generated_at, &self.branding);
        let bytes = pdf::render_pdf(&document)?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self
            .output_dir
            .join(format::report_file_name(generated_at.date()));
        std::fs::write(&path, bytes)?;

        tracing::info!(
            path = %path.display(),
            rows = document.row_count,
            pages = document.page_count(),
            "report written"
        );
        Ok(path)
    }
}
