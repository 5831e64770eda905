// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SheetSnapshot, is_numeric_column};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) const SHEET_NAME: &str = "SalarySheet";

const HEADER_BG: Color = Color::RGB(0x2F75B5);
const REST_HEADER_BG: Color = Color::RGB(0xC00000);
const REST_CELL_BG: Color = Color::RGB(0xFDE9E7);

/// Export XLSX: one sheet, styled header, rest days highlighted.
pub(crate) fn export_xlsx(snapshot: &SheetSnapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_io_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    for (col, header) in snapshot.headers.iter().enumerate() {
        let bg = if snapshot.rest_columns[col] {
            REST_HEADER_BG
        } else {
            HEADER_BG
        };
        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::RGB(0xFFFFFF))
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_io_app_error)?;
    }

    // Header row plus the name column stay visible while scrolling.
    worksheet.set_freeze_panes(1, 1).map_err(to_io_app_error)?;

    let mut col_widths: Vec<usize> = snapshot
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, values) in snapshot.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;

        for (col, value) in values.iter().enumerate() {
            let bg = if snapshot.rest_columns[col] {
                REST_CELL_BG
            } else {
                Color::RGB(0xFFFFFF)
            };
            let kind = if snapshot.day_columns().contains(&col) {
                CellKind::Day
            } else if is_numeric_column(col) {
                CellKind::Number
            } else {
                CellKind::Text
            };

            write_xlsx_cell(worksheet, row, col as u16, value, bg, kind)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// How a snapshot column is written. Decided by position, never by content,
/// so names like `007` or `inf` stay text.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Text,
    Number,
    Day,
}

/// Write one cell: computed columns as numbers, glyphs centered, text as-is.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    kind: CellKind,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match kind {
        CellKind::Day => {
            let fmt = base.set_align(FormatAlign::Center);
            worksheet
                .write_with_format(row, col, s, &fmt)
                .map_err(to_io_app_error)?;
        }
        CellKind::Number => match s.parse::<f64>() {
            Ok(num) if num.is_finite() => {
                let num_format = if s.contains('.') { "0.00" } else { "0" };
                let fmt = base.set_align(FormatAlign::Right).set_num_format(num_format);
                worksheet
                    .write_with_format(row, col, num, &fmt)
                    .map_err(to_io_app_error)?;
            }
            _ => {
                worksheet
                    .write_with_format(row, col, s, &base)
                    .map_err(to_io_app_error)?;
            }
        },
        CellKind::Text => {
            worksheet
                .write_with_format(row, col, s, &base)
                .map_err(to_io_app_error)?;
        }
    }

    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
