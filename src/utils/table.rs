//! Table rendering utilities for CLI outputs.

use crate::utils::colors::paint;
use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
    pub right_align: bool,
    /// Color applied to header and cells of the column.
    pub color: &'static str,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        let header = header.into();
        Self {
            width: UnicodeWidthStr::width(header.as_str()),
            header,
            right_align: false,
            color: crate::utils::colors::RESET,
        }
    }

    pub fn right(mut self) -> Self {
        self.right_align = true;
        self
    }

    pub fn colored(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }
}

/// A cell may carry its own color, overriding the column one.
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, color: None }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, widening columns to fit.
    pub fn add_row(&mut self, row: Vec<Cell>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.text.as_str()));
        }
        self.rows.push(row);
    }

    fn pad(&self, col: &Column, text: &str) -> String {
        if col.right_align {
            pad_left(text, col.width)
        } else {
            pad_right(text, col.width)
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&paint(&self.pad(col, &col.header), col.color));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (col, cell) in self.columns.iter().zip(row) {
                let color = cell.color.unwrap_or(col.color);
                out.push_str(&paint(&self.pad(col, &cell.text), color));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
