// src/export/mod.rs

mod doc;
mod fs_utils;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::ExportLogic;
pub use model::SheetSnapshot;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every exporter.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
    Doc,
    /// All three formats
    All,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Doc => "doc",
            ExportFormat::All => "all",
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            "doc" | "word" => Ok(ExportFormat::Doc),
            "all" => Ok(ExportFormat::All),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }

    /// Fixed output file name of the format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "Salary_Sheet.xlsx",
            ExportFormat::Pdf => "Salary_Sheet.pdf",
            ExportFormat::Doc => "Salary_Sheet.doc",
            ExportFormat::All => "Salary_Sheet",
        }
    }

    pub fn expand(self) -> Vec<ExportFormat> {
        match self {
            ExportFormat::All => vec![ExportFormat::Xlsx, ExportFormat::Pdf, ExportFormat::Doc],
            f => vec![f],
        }
    }
}
