pub mod docx;
pub mod html;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub struct OutputPaths {
    pub markdown: PathBuf,
    pub text: PathBuf,
    pub html: PathBuf,
    pub docx: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            markdown: dir.join("report.md"),
            text: dir.join("report.txt"),
            html: dir.join("report.html"),
            docx: dir.join("report.docx"),
        }
    }
}

/// Writes the report in all four formats, overwriting existing files.
/// Writes run in order md, txt, html, docx; the first failure aborts the run
/// and artifacts written before it stay on disk.
pub fn write_report(report_text: &str, year: i32, dir: &Path) -> AppResult<Vec<PathBuf>> {
    let paths = OutputPaths::in_dir(dir);

    fs::write(&paths.markdown, report_text).map_err(|e| AppError::write(&paths.markdown, e))?;
    tracing::info!(path = %paths.markdown.display(), "Saved markdown report");

    fs::write(&paths.text, report_text).map_err(|e| AppError::write(&paths.text, e))?;
    tracing::info!(path = %paths.text.display(), "Saved plain-text report");

    let html_document = html::render_document(report_text, year);
    fs::write(&paths.html, html_document).map_err(|e| AppError::write(&paths.html, e))?;
    tracing::info!(path = %paths.html.display(), "Saved HTML report");

    docx::write_docx(report_text, &paths.docx)?;
    tracing::info!(path = %paths.docx.display(), "Saved Word report");

    Ok(vec![paths.markdown, paths.text, paths.html, paths.docx])
}
