use thiserror::Error;

use crate::value::ValueKind;

pub type RowfillResult<T> = Result<T, RowfillError>;

#[derive(Error, Debug)]
pub enum RowfillError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Registry construction failures. Fatal: a partial registry is never
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unsupported field type {declared} (field {field})")]
    UnsupportedType {
        field: &'static str,
        declared: &'static str,
    },
}

/// Failures while decoding one row. Mutation is not transactional, so
/// fields written before the failure stay written.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// The cell parsed neither as live input nor through a default.
    #[error("column {column}: {source}")]
    Cell {
        column: String,
        source: ParseValueError,
    },

    /// The configured default literal does not parse. A configuration bug,
    /// not a data-quality issue.
    #[error("invalid default value {value:?} for column {column}: {source}")]
    MalformedDefault {
        column: String,
        value: String,
        source: ParseValueError,
    },

    /// A write function received a value kind it cannot store. Unreachable
    /// through a consistently built registry.
    #[error("field {field}: {source}")]
    Mismatch {
        field: &'static str,
        source: ValueTypeError,
    },
}

/// A single cell failed to parse as its declared type.
#[derive(Error, Debug)]
pub enum ParseValueError {
    #[error(transparent)]
    Int(#[from] std::num::ParseIntError),
    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),
    #[error(transparent)]
    Uuid(#[from] uuid::Error),
    #[error(transparent)]
    Timestamp(#[from] chrono::ParseError),
    #[error("timestamp parsing requires a time format annotation")]
    MissingTimeFormat,
}

/// A [`Value`](crate::value::Value) variant did not match the field it was
/// written into.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected a {expected} value, got {got}")]
pub struct ValueTypeError {
    pub expected: ValueKind,
    pub got: ValueKind,
}
