// src/export/doc.rs

use crate::errors::AppResult;
use crate::export::model::SheetSnapshot;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

const BOM: &str = "\u{feff}";

/// Export DOC: the table markup inside a Word-compatible HTML envelope.
pub(crate) fn export_doc(snapshot: &SheetSnapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to DOC: {}", path.display()));

    let mut out = String::from(BOM);
    out.push_str(&render_document(snapshot));
    fs::write(path, out)?;

    notify_export_success("DOC", path);
    Ok(())
}

pub(crate) fn render_document(snapshot: &SheetSnapshot) -> String {
    format!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
xmlns:w='urn:schemas-microsoft-com:office:word' \
xmlns='http://www.w3.org/TR/REC-html40'>\n\
<head><meta charset='utf-8'><title>{title}</title></head><body>\n\
<h2>{title}</h2>\n{table}</body></html>\n",
        title = escape(&snapshot.title),
        table = render_table(snapshot),
    )
}

pub(crate) fn render_table(snapshot: &SheetSnapshot) -> String {
    let mut html = String::from(
        "<table id='salaryTable' border='1' cellspacing='0' cellpadding='3' \
style='border-collapse:collapse;font-size:9pt'>\n<thead><tr>",
    );

    for (i, h) in snapshot.headers.iter().enumerate() {
        if snapshot.rest_columns[i] {
            let (day, label) = h.split_once(' ').unwrap_or((h.as_str(), ""));
            html.push_str(&format!(
                "<th style='color:#C00000'>{}<br><small>{}</small></th>",
                escape(day),
                escape(label)
            ));
        } else {
            html.push_str(&format!("<th>{}</th>", escape(h)));
        }
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &snapshot.rows {
        html.push_str("<tr>");
        for (i, cell) in row.iter().enumerate() {
            if snapshot.rest_columns[i] {
                html.push_str(&format!(
                    "<td style='background:#FDE9E7;text-align:center'>{}</td>",
                    escape(cell)
                ));
            } else if snapshot.day_columns().contains(&i) {
                html.push_str(&format!("<td style='text-align:center'>{}</td>", escape(cell)));
            } else {
                html.push_str(&format!("<td>{}</td>", escape(cell)));
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody></table>\n");
    html
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
