//! Row filtering and column replacement on working frames.

use std::collections::HashSet;

use campanha_common::column_text;
use polars::prelude::{BooleanChunked, Column, DataFrame, DataType, NewChunkedArray};

use crate::error::Result;

pub(crate) fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}

/// Keep-mask that is true for the first occurrence of each value.
pub(crate) fn first_occurrence_mask(values: &[String]) -> Vec<bool> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .map(|value| seen.insert(value.as_str()))
        .collect()
}

/// Drops rows whose value in `column` repeats an earlier row's value.
pub(crate) fn dedupe_by_column(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let Some(values) = column_text(df, column) else {
        return Ok(df.clone());
    };
    filter_rows(df, &first_occurrence_mask(&values))
}

pub(crate) fn set_text_column(df: &mut DataFrame, name: &str, values: Vec<String>) -> Result<()> {
    df.with_column(Column::new(name.into(), values))?;
    Ok(())
}

/// Rewrites a non-string column as text so every output column is a string.
pub(crate) fn ensure_text_column(df: &mut DataFrame, name: &str) -> Result<()> {
    let is_text = match df.column(name) {
        Ok(column) => column.dtype() == &DataType::String,
        Err(_) => return Ok(()),
    };
    if is_text {
        return Ok(());
    }
    if let Some(values) = column_text(df, name) {
        set_text_column(df, name, values)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_mask_keeps_first() {
        let values: Vec<String> = ["a", "b", "a", "c", "b"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            first_occurrence_mask(&values),
            vec![true, true, false, true, false]
        );
    }

    #[test]
    fn ensure_text_column_converts_numbers() {
        let mut df = DataFrame::new(vec![Column::new("Numero".into(), &[1i64, 2])]).unwrap();
        ensure_text_column(&mut df, "Numero").unwrap();
        let column = df.column("Numero").unwrap();
        assert_eq!(column.dtype(), &DataType::String);
        assert_eq!(column.str().unwrap().get(1), Some("2"));
    }
}
