//! Line scanning shared by the text format parsers.

use evoke_core::errors::{EvokeResult, FormatError};

/// Iterate non-blank lines, trimmed, numbered from 1. Line numbers
/// refer to the original text so parse errors point at the file.
pub(crate) fn numbered_lines(
    text: &str,
) -> std::iter::Peekable<impl Iterator<Item = (usize, &str)>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .peekable()
}

pub(crate) fn parse_header<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> EvokeResult<T> {
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(FormatError::InvalidHeaderField {
            field,
            value: value.to_string(),
        }
        .into()),
    }
}

pub(crate) fn parse_flag(field: &'static str, value: &str) -> EvokeResult<bool> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(FormatError::InvalidHeaderField {
            field,
            value: other.to_string(),
        }
        .into()),
    }
}

/// Parse one finite value from a data row.
pub(crate) fn parse_value(line_no: usize, token: &str) -> EvokeResult<f64> {
    let value: f64 = token.parse().map_err(|_| FormatError::InvalidValue {
        line: line_no,
        value: token.to_string(),
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormatError::InvalidValue {
            line: line_no,
            value: token.to_string(),
        }
        .into())
    }
}

pub(crate) fn require<T>(field: &'static str, value: Option<T>) -> EvokeResult<T> {
    value.ok_or_else(|| FormatError::MissingHeaderField { field }.into())
}
