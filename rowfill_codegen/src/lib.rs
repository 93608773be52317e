//! # rowfill_codegen
//!
//! Static analysis and code generation for the rowfill toolkit: inspect
//! two struct definitions, match their fields, and emit a formatted
//! conversion function copying each matched field from a source instance
//! into a destination instance.
//!
//! The pipeline is three pure stages over caller-supplied sources:
//!
//! 1. [`source::SourceSet::find_record`] parses each declaration into a
//!    [`shape::RecordShape`] in declaration order.
//! 2. [`matcher::make_pairs`] matches fields through case- and
//!    delimiter-insensitive canonical keys, gated on declared-type
//!    equality when both sides are known.
//! 3. [`emit::generate`] builds the conversion function as a syntax tree
//!    and writes it through the canonical formatter.
//!
//! ## Example
//!
//! ```rust,ignore
//! use rowfill_codegen::emit::{self, Target};
//! use rowfill_codegen::source::SourceSet;
//!
//! let mut sources = SourceSet::new();
//! sources.add_path("src/models.rs")?;
//! sources.add_path("src/legacy.rs")?;
//!
//! let dest: Target = "models::User".parse()?;
//! let src: Target = "legacy::User".parse()?;
//! let pairs = rowfill_codegen::inspect_pairs(&sources, dest.name(), src.name())?;
//!
//! let mut out = std::fs::File::create("generated/user.rs")?;
//! emit::generate(&mut out, &dest, &src, &[dest.clone(), src.clone()], &pairs)?;
//! ```

pub mod emit;
pub mod error;
pub mod matcher;
pub mod shape;
pub mod source;

pub use error::{CodegenError, CodegenResult, EmitError, InspectError};

use matcher::Pair;
use source::SourceSet;

/// Inspects both named structs across the source set and computes their
/// correspondence pairs.
///
/// Inspection failures abort the whole request; no partial pair list is
/// returned.
pub fn inspect_pairs(
    sources: &SourceSet,
    dest_name: &str,
    src_name: &str,
) -> Result<Vec<Pair>, InspectError> {
    let dest = sources.find_record(dest_name)?;
    let src = sources.find_record(src_name)?;
    Ok(matcher::make_pairs(&dest, &src))
}
