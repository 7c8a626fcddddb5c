// src/render.rs
//! Text renderers for the final record list: labeled lines and the ASCII
//! summary table. Missing values print as empty strings.

use crate::config::consts::{EMPTY_TABLE, SEPARATOR_WIDTH, TABLE_TITLE};
use crate::config::options::OutputOptions;
use crate::data::{DeputyRecord, Field};

/// Full report: one block per record, then the table if requested.
pub fn render(records: &[DeputyRecord], out: &OutputOptions) -> String {
    let mut text = render_lines(records, &out.fields, out.barefields, out.skip_separators());
    if out.table {
        text.push_str("\n\n");
        text.push_str(TABLE_TITLE);
        text.push('\n');
        text.push_str(&ascii_table(records, &out.fields));
        text.push('\n');
    }
    text
}

/// `Label: value` per field (bare values with `barefields`), each record
/// followed by a dashed line unless `skip_separators`.
pub fn render_lines(records: &[DeputyRecord], fields: &[Field], barefields: bool, skip_separators: bool) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut lines: Vec<String> = Vec::with_capacity(records.len() * (fields.len() + 1));

    for rec in records {
        for &field in fields {
            let val = rec.get(field).unwrap_or_default();
            if barefields {
                lines.push(s!(val));
            } else {
                lines.push(format!("{}: {}", field.label(), val));
            }
        }
        if !skip_separators {
            lines.push(separator.clone());
        }
    }
    lines.join("\n")
}

/// Fixed-width table, columns padded to their widest cell.
pub fn ascii_table(records: &[DeputyRecord], fields: &[Field]) -> String {
    if records.is_empty() || fields.is_empty() {
        return s!(EMPTY_TABLE);
    }

    let header: Vec<String> = fields.iter().map(|f| f.label()).collect();
    let body: Vec<Vec<&str>> = records
        .iter()
        .map(|r| fields.iter().map(|&f| r.get(f).unwrap_or_default()).collect())
        .collect();

    let widths: Vec<usize> = (0..fields.len())
        .map(|c| {
            body.iter()
                .map(|row| row[c].chars().count())
                .chain(std::iter::once(header[c].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let fmt_row = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let mut lines = Vec::with_capacity(records.len() + 2);
    let header_refs: Vec<&str> = header.iter().map(String::as_str).collect();
    lines.push(fmt_row(&header_refs[..]));
    lines.push(widths.iter().map(|&w| "-".repeat(w)).collect::<Vec<_>>().join("-+-"));
    for row in &body {
        lines.push(fmt_row(&row[..]));
    }
    lines.join("\n")
}
