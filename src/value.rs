//! Typed cell values.
//!
//! Every parser produces a [`Value`], and every write function consumes one.
//! The variant set is closed: it mirrors the built-in parser tables in
//! [`crate::parse`], and [`Persist`](crate::persist::Persist) extraction is
//! limited to the same set.

use std::fmt;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::ValueTypeError;

/// One decoded cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f32),
    Uuid(Uuid),
    Timestamp(NaiveDateTime),
}

/// Discriminant-only view of [`Value`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
    Float,
    Uuid,
    Timestamp,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Uuid(_) => ValueKind::Uuid,
            Value::Timestamp(_) => ValueKind::Timestamp,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Uuid => "uuid",
            ValueKind::Timestamp => "timestamp",
        })
    }
}

macro_rules! impl_value_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = ValueTypeError;

                fn try_from(value: Value) -> Result<Self, ValueTypeError> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(ValueTypeError {
                            expected: ValueKind::$variant,
                            got: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_value_conversions!(
    String => Str,
    i64 => Int,
    f32 => Float,
    Uuid => Uuid,
    NaiveDateTime => Timestamp,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}
