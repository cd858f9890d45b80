//! Assembling decoded rows into a `DataFrame`.

use std::collections::BTreeSet;

use polars::prelude::{Column, DataFrame};

use crate::error::Result;

/// Normalizes a header cell: strips a byte-order mark and collapses whitespace.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims a data cell; blank cells become `None`.
pub(crate) fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Makes header names usable as column names.
///
/// Blank headers become `Unnamed: <index>`; repeated names get `_1`, `_2`, ...
/// suffixes in order of appearance.
pub(crate) fn unique_headers(headers: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut names = Vec::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header.clone()
        };
        let mut name = base.clone();
        let mut suffix = 1usize;
        while !seen.insert(name.clone()) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        names.push(name);
    }
    names
}

/// Builds a frame of nullable string columns.
///
/// Rows shorter than the header are padded with nulls; extra cells are dropped.
pub(crate) fn frame_from_rows(headers: &[String], rows: &[Vec<Option<String>>]) -> Result<DataFrame> {
    let names = unique_headers(headers);
    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<Option<&str>> = rows
                .iter()
                .map(|row| row.get(idx).and_then(|value| value.as_deref()))
                .collect();
            Column::new(name.as_str().into(), values)
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}
