//! Phone number normalization.

use std::collections::HashSet;

use campanha_common::column_text;
use polars::prelude::DataFrame;

/// Keeps only the ASCII digits of a phone value.
///
/// # Examples
///
/// ```
/// use campanha_transform::normalize_phone;
///
/// assert_eq!(normalize_phone("(11) 98888-1234"), "11988881234");
/// assert_eq!(normalize_phone("+55 11 9"), "55119");
/// assert_eq!(normalize_phone("sem telefone"), "");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalized phones of a column, or `None` if the column is missing.
pub fn normalized_column(df: &DataFrame, column: &str) -> Option<Vec<String>> {
    column_text(df, column).map(|values| {
        values
            .iter()
            .map(String::as_str)
            .map(normalize_phone)
            .collect()
    })
}

/// Set of non-empty normalized phones found in a column.
pub fn phone_set(df: &DataFrame, column: &str) -> Option<HashSet<String>> {
    let phones = normalized_column(df, column)?;
    Some(phones.into_iter().filter(|p| !p.is_empty()).collect())
}
