use std::io;

/// SDM and protocol text format errors.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("missing header field '{field}'")]
    MissingHeaderField { field: &'static str },

    #[error("invalid header field '{field}': '{value}'")]
    InvalidHeaderField { field: &'static str, value: String },

    #[error("unsupported time resolution '{value}'")]
    UnsupportedResolution { value: String },

    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unparseable value '{value}'")]
    InvalidValue { line: usize, value: String },

    #[error("truncated document: expected {expected} data rows, found {found}")]
    TruncatedData { expected: usize, found: usize },

    #[error("non-finite value in predictor '{predictor}' at volume {volume}")]
    NonFiniteValue { predictor: String, volume: usize },

    #[error("predictor name '{name}' contains a quote character")]
    UnencodableName { name: String },
}
