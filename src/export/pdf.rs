use crate::export::model::SheetSnapshot;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A3 landscape, in points.
const A3_LANDSCAPE: (f32, f32) = (1190.55, 841.89);

/// Natural width of a day column before fitting.
const DAY_COL_W: f32 = 22.0;

/// Average Helvetica advance, as a fraction of the font size.
const CHAR_W: f32 = 0.55;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_id: Ref,

    font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: A3_LANDSCAPE.0,
            page_h: A3_LANDSCAPE.1,
            margin: 28.35,
            row_h: 20.0,

            next_id,
            font_id,
            bold_id,

            font_size: 9.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(b"F1"), self.font_id)
            .pair(Name(b"F2"), self.bold_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(
        &self,
        content: &mut Content,
        font: &[u8],
        x: f32,
        y: f32,
        size: f32,
        text: &str,
    ) {
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&win_ansi(text)));
        content.end_text();
    }

    fn fill_rect(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        rgb: (f32, f32, f32),
    ) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.set_line_width(0.5);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    /// Attendance marks are drawn as strokes; Helvetica has no check or cross.
    fn draw_mark(
        &self,
        content: &mut Content,
        glyph: &str,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) {
        let s = w.min(h) * 0.6;
        let (cx, cy) = (x + w / 2.0, y + h / 2.0);

        match glyph {
            "✔" => {
                content.save_state();
                content.set_stroke_rgb(0.10, 0.55, 0.20);
                content.set_line_width(s * 0.15);
                content.move_to(cx - s * 0.45, cy);
                content.line_to(cx - s * 0.12, cy - s * 0.35);
                content.line_to(cx + s * 0.45, cy + s * 0.40);
                content.stroke();
                content.restore_state();
            }
            "✖" => {
                content.save_state();
                content.set_stroke_rgb(0.80, 0.10, 0.10);
                content.set_line_width(s * 0.15);
                content.move_to(cx - s * 0.35, cy - s * 0.35);
                content.line_to(cx + s * 0.35, cy + s * 0.35);
                content.move_to(cx - s * 0.35, cy + s * 0.35);
                content.line_to(cx + s * 0.35, cy - s * 0.35);
                content.stroke();
                content.restore_state();
            }
            "" => {}
            other => {
                let size = s * 1.2;
                let tx = cx - text_width(other, size) / 2.0;
                self.draw_text(content, b"F2", tx, cy - size * 0.35, size, other);
            }
        }
    }

    /// Natural column widths, then scaled down so the table fits the page width.
    /// Returns the widths and the applied scale.
    fn compute_col_widths(&self, snapshot: &SheetSnapshot) -> (Vec<f32>, f32) {
        let days = snapshot.day_columns();

        let mut widths: Vec<f32> = snapshot
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if days.contains(&i) {
                    DAY_COL_W
                } else {
                    text_width(h, self.font_size) + 10.0
                }
            })
            .collect();

        for row in &snapshot.rows {
            for (i, cell) in row.iter().enumerate() {
                if !days.contains(&i) {
                    widths[i] = widths[i].max(text_width(cell, self.font_size) + 10.0);
                }
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;
        let scale = if total > max { max / total } else { 1.0 };

        for w in &mut widths {
            *w *= scale;
        }

        (widths, scale)
    }

    fn draw_header(
        &self,
        content: &mut Content,
        snapshot: &SheetSnapshot,
        widths: &[f32],
        y: f32,
        h: f32,
        size: f32,
    ) {
        let total: f32 = widths.iter().sum();
        self.fill_rect(content, self.margin, y, total, h, (0.18, 0.46, 0.71));

        let days = snapshot.day_columns();
        let mut x = self.margin;

        for (i, label) in snapshot.headers.iter().enumerate() {
            let w = widths[i];
            if snapshot.rest_columns[i] {
                self.fill_rect(content, x, y, w, h, (0.75, 0.0, 0.0));
            }

            content.save_state();
            content.set_fill_rgb(1.0, 1.0, 1.0);
            if days.contains(&i) {
                // "7 Sunday" is split over two lines inside the narrow column.
                let mut parts = label.splitn(2, ' ');
                let day = parts.next().unwrap_or_default();
                let tx = x + (w - text_width(day, size)) / 2.0;
                self.draw_text(content, b"F2", tx, y + h * 0.55, size, day);
                if let Some(sub) = parts.next() {
                    // "Sunday" must fit inside the narrow day column
                    let fit = (w - 2.0) / (sub.chars().count().max(1) as f32 * CHAR_W);
                    let small = (size * 0.75).min(fit);
                    let sx = x + (w - text_width(sub, small)) / 2.0;
                    self.draw_text(content, b"F1", sx, y + h * 0.15, small, sub);
                }
            } else {
                let pad = 4.0 * (size / self.font_size);
                self.draw_text(content, b"F2", x + pad, y + h * 0.35, size, label);
            }
            content.restore_state();

            self.draw_cell_borders(content, x, y, w, h);
            x += w;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_row(
        &self,
        content: &mut Content,
        snapshot: &SheetSnapshot,
        widths: &[f32],
        y: f32,
        h: f32,
        size: f32,
        row: &[String],
    ) {
        let days = snapshot.day_columns();
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = widths[i];
            if snapshot.rest_columns[i] {
                self.fill_rect(content, x, y, w, h, (0.99, 0.91, 0.90));
            }

            if days.contains(&i) {
                self.draw_mark(content, text, x, y, w, h);
            } else {
                let pad = 4.0 * (size / self.font_size);
                self.draw_text(content, b"F1", x + pad, y + h * 0.3, size, text);
            }

            self.draw_cell_borders(content, x, y, w, h);
            x += w;
        }
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            b"F2",
            self.margin,
            self.page_h - self.margin - self.title_font_size,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            b"F1",
            self.page_w - self.margin - 40.0,
            self.margin / 2.0,
            self.font_size,
            &pg,
        );
    }

    /// Landscape table fitted to the page width; continues on new pages
    /// with the header repeated when rows do not fit.
    pub fn write_table(&mut self, snapshot: &SheetSnapshot) {
        let (widths, scale) = self.compute_col_widths(snapshot);
        let row_h = self.row_h * scale.max(0.5);
        let header_h = row_h * 1.6;
        let size = self.font_size * scale.max(0.5);

        let top = self.page_h - self.margin - self.title_font_size - 12.0;

        let mut remaining: &[Vec<String>] = &snapshot.rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, &snapshot.title, page_idx);

            let mut y = top - header_h;
            self.draw_header(&mut content, snapshot, &widths, y, header_h, size);

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - row_h < self.margin {
                    break;
                }
                y -= row_h;

                if i % 2 == 1 {
                    let total: f32 = widths.iter().sum();
                    self.fill_rect(&mut content, self.margin, y, total, row_h, (0.96, 0.96, 0.96));
                }

                self.draw_row(&mut content, snapshot, &widths, y, row_h, size, row);
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() || consumed == 0 {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * CHAR_W
}

/// Encode for the WinAnsi Type1 fonts. Latin-1 maps 1:1, the rest becomes '?'.
pub(crate) fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
