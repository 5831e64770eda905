// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::SheetSnapshot;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Export PDF: the sheet drawn on landscape pages by PdfManager.
pub(crate) fn export_pdf(snapshot: &SheetSnapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_table(snapshot);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
