//! Type analysis utilities shared by the generators.

use quote::ToTokens;
use syn::{PathArguments, Type};

/// Renders the declared type name the runtime parser tables are keyed by.
///
/// A plain path without generic arguments renders as its segments joined
/// with `::` (`String`, `uuid::Uuid`). Anything else — generics,
/// references, tuples — falls back to the raw token text, which matches no
/// parser table and surfaces as an unsupported-type error at registry
/// build.
pub fn declared_type_name(ty: &Type) -> String {
    if let Some(path) = plain_path(ty) {
        return path;
    }
    ty.to_token_stream().to_string()
}

fn plain_path(ty: &Type) -> Option<String> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let mut segments = Vec::with_capacity(type_path.path.segments.len());
    for segment in &type_path.path.segments {
        if !matches!(segment.arguments, PathArguments::None) {
            return None;
        }
        segments.push(segment.ident.to_string());
    }
    Some(segments.join("::"))
}
