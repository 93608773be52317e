//! Field-level structure extracted from parsed sources.

use syn::{ItemStruct, PathArguments, Type, Visibility};

/// One field's name, declared type name and visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,

    /// Bare or qualified path without generic arguments, rendered
    /// `seg::seg`, when derivable from the parsed type.
    pub declared_type: Option<String>,

    /// Decided once at extraction: only plain `pub` counts.
    pub is_public: bool,
}

/// Ordered fields of one named-field struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShape {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordShape {
    /// Extracts the shape of a named-field struct, non-public fields
    /// included. Returns `None` for tuple and unit structs.
    pub(crate) fn from_item(item: &ItemStruct) -> Option<Self> {
        let syn::Fields::Named(named) = &item.fields else {
            return None;
        };
        let fields = named
            .named
            .iter()
            .map(|field| FieldDescriptor {
                name: field
                    .ident
                    .as_ref()
                    .expect("named fields always carry an identifier")
                    .to_string(),
                declared_type: type_name(&field.ty),
                is_public: matches!(field.vis, Visibility::Public(_)),
            })
            .collect();
        Some(Self {
            name: item.ident.to_string(),
            fields,
        })
    }
}

/// Declared type text used for compatibility gating. Paths carrying
/// generic arguments, references and the like have no single name and
/// yield `None`.
fn type_name(ty: &Type) -> Option<String> {
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
