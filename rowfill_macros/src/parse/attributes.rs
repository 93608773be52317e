//! Field attribute parsing.
//!
//! Two independent attribute namespaces are recognized: `#[mapping(...)]`
//! drives row decoding, `#[persist(...)]` drives persistence extraction.

use syn::Field;
use syn::meta::ParseNestedMeta;

/// Parsed `#[mapping(...)]` values from one field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MappingAttributes {
    /// Column key binding the field into the decode pipeline.
    pub column: Option<String>,

    /// Fallback literal, kept verbatim.
    pub default: Option<String>,

    /// strftime format for the timestamp parser.
    pub time_format: Option<String>,
}

impl MappingAttributes {
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("mapping") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("column") {
                    out.column = Some(lit_str(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("default") {
                    out.default = Some(lit_str(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("time_format") {
                    out.time_format = Some(lit_str(&meta)?);
                    Ok(())
                } else {
                    Err(meta.error("expected `column`, `default` or `time_format`"))
                }
            })?;
        }
        Ok(out)
    }
}

/// Parsed `#[persist(...)]` values from one field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PersistAttributes {
    /// Column name the field is extracted under.
    pub column: Option<String>,
}

impl PersistAttributes {
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("persist") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("column") {
                    out.column = Some(lit_str(&meta)?);
                    Ok(())
                } else {
                    Err(meta.error("expected `column`"))
                }
            })?;
        }
        Ok(out)
    }
}

fn lit_str(meta: &ParseNestedMeta) -> syn::Result<String> {
    let lit: syn::LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}
