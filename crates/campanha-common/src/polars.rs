//! Polars cell helpers.
//!
//! Loaded tables carry string columns, but callers may hand over frames with
//! numeric or boolean columns (spreadsheet phone numbers are a common case).
//! These helpers give every rule a single text view of a cell.

use polars::prelude::{AnyValue, DataFrame};

/// Largest magnitude at which an integral `f64` is still printed as an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Converts a Polars `AnyValue` to its text form.
///
/// Nulls become the empty string and integral floats lose their fractional
/// part, so a phone stored as `11988881234.0` reads as `11988881234`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use campanha_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Float64(11988881234.0)), "11988881234");
/// assert_eq!(any_to_string(AnyValue::String("ana")), "ana");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number, dropping the fraction when it is zero.
///
/// Non-finite values have no meaningful text form and render as empty.
///
/// # Examples
///
/// ```
/// use campanha_common::format_numeric;
///
/// assert_eq!(format_numeric(10.0), "10");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(f64::NAN), "");
/// ```
pub fn format_numeric(v: f64) -> String {
    if !v.is_finite() {
        return String::new();
    }
    if v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER {
        return format!("{}", v as i64);
    }
    format!("{v}")
}

/// Returns true when the frame has a column with exactly this name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Reads every cell of a column as text, or `None` if the column is missing.
pub fn column_text(df: &DataFrame, name: &str) -> Option<Vec<String>> {
    let column = df.column(name).ok()?;
    let values = (0..df.height())
        .map(|idx| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect();
    Some(values)
}
