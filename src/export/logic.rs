// src/export/logic.rs

use crate::core::table::SalarySheet;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::doc::export_doc;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::SheetSnapshot;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::utils::path::is_absolute;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Recompute every row, snapshot the sheet and write it in `format`
    /// under its fixed file name inside `dir`.
    ///
    /// - `dir`: absolute output directory, created if missing
    /// - `force`: overwrite an existing file without asking
    /// - `input`: where the overwrite confirmation is read from
    ///
    /// Returns the written paths.
    pub fn export<R: BufRead>(
        sheet: &mut SalarySheet,
        format: ExportFormat,
        dir: &Path,
        title: &str,
        force: bool,
        input: &mut R,
    ) -> AppResult<Vec<PathBuf>> {
        if !is_absolute(dir) {
            return Err(AppError::Export(format!(
                "Output directory must be absolute: {}",
                dir.display()
            )));
        }
        fs::create_dir_all(dir)?;

        sheet.recompute();
        let snapshot = SheetSnapshot::from_sheet(sheet, title);

        let mut written = Vec::new();
        for fmt in format.expand() {
            let path = dir.join(fmt.file_name());
            ensure_writable(&path, force, input)?;

            write_one(fmt, &snapshot, &path)?;
            written.push(path);
        }

        Ok(written)
    }
}

fn write_one(format: ExportFormat, snapshot: &SheetSnapshot, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Xlsx => export_xlsx(snapshot, path),
        ExportFormat::Pdf => export_pdf(snapshot, path),
        ExportFormat::Doc => export_doc(snapshot, path),
        ExportFormat::All => Err(AppError::InvalidExportFormat(format.as_str().to_string())),
    }
}
