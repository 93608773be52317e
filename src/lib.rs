//! # rowfill
//!
//! Fill typed records from textual tabular rows, and generate field-copy
//! conversion functions between record types.
//!
//! ## Features
//!
//! - **Attribute-Driven**: `#[derive(RowRecord)]` binds fields to column
//!   keys at compile time, no runtime reflection
//! - **Closed Parser Tables**: string, integer and 32-bit float scalars
//!   plus UUID and timestamp special types
//! - **Default Fallback**: per-field default literals, parsed like live
//!   input when a column is absent or a cell fails to parse
//! - **Reusable Registries**: built once per record type, immutable and
//!   shareable across readers afterwards
//! - **Persistence Extraction**: `#[derive(Persist)]` yields ordered
//!   column-name/value lists from a tagged instance
//!
//! The companion `rowfill_codegen` crate holds the static side of the
//! toolkit: it inspects two struct definitions, matches their fields by
//! normalized name, and emits a formatted conversion function.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowfill::prelude::*;
//!
//! #[derive(RowRecord, Default)]
//! pub struct Measurement {
//!     #[mapping(column = "name")]
//!     pub name: String,
//!     #[mapping(column = "value")]
//!     pub value: f32,
//!     #[mapping(column = "date", time_format = "%Y-%m-%d")]
//!     pub date: chrono::NaiveDateTime,
//!     #[mapping(column = "score", default = "100")]
//!     pub score: i64,
//! }
//!
//! let registry = Registry::<Measurement>::build()?;
//! let header = HeaderIndex::new(&["name", "value", "date"]);
//!
//! let mut row = Measurement::default();
//! registry.decode(&mut row, &header, &["Marty McFly", "123.4", "2015-10-21"])?;
//! ```

pub mod error;
pub mod header;
pub mod parse;
pub mod persist;
pub mod prelude;
pub mod registry;
pub mod value;

pub use error::{RowfillError, RowfillResult};
pub use header::HeaderIndex;
pub use persist::Persist;
pub use registry::{FieldSpec, Registry, RowRecord, decode_row};
pub use value::{Value, ValueKind};

// Derive macros are re-exported so users need a single dependency.
pub use rowfill_macros::{Persist, RowRecord};
