//! Prelude module for convenient imports.
//!
//! Re-exports the types most callers need, so decoding works with a single
//! import:
//!
//! ```rust,ignore
//! use rowfill::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - [`RowRecord`] / [`Persist`]: the two derivable traits (derive macros
//!   re-exported under the same names)
//! - [`Registry`] and [`FieldSpec`]: registry construction, derived or
//!   explicit
//! - [`HeaderIndex`]: column label → position lookup
//! - [`Value`] / [`ValueKind`]: the closed typed-cell enum
//! - [`decode_row`]: one-shot build-and-decode convenience
//! - [`RowfillError`] / [`RowfillResult`] and the per-concern error enums

pub use crate::error::{
    DecodeError, ParseValueError, RegistryError, RowfillError, RowfillResult, ValueTypeError,
};
pub use crate::header::HeaderIndex;
pub use crate::parse::{ParseOptions, ParserFn};
pub use crate::persist::Persist;
pub use crate::registry::{FieldSpec, Registry, RowRecord, WriteFn, decode_row};
pub use crate::value::{Value, ValueKind};

pub use rowfill_macros::{Persist, RowRecord};
