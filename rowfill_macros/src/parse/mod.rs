//! Derive-input parsing.
//!
//! These structures hold everything extracted from the `DeriveInput`,
//! keeping a clean seam between the parsing phase and code generation.

pub mod attributes;

use syn::{Data, DeriveInput, Fields, Generics, Ident};

use crate::parse::attributes::{MappingAttributes, PersistAttributes};

/// Complete metadata for one derived record struct.
pub struct RecordMetadata {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, carried through to the generated impl.
    pub generics: Generics,

    /// All named fields, in declaration order.
    pub fields: Vec<FieldMetadata>,
}

/// Metadata for one named field.
pub struct FieldMetadata {
    pub ident: Ident,

    /// Declared type name the runtime parser tables are keyed by: the
    /// field's path rendered `seg::seg` when it carries no generic
    /// arguments, otherwise the raw type tokens.
    pub declared: String,

    pub mapping: MappingAttributes,

    pub persist: PersistAttributes,
}

impl RecordMetadata {
    /// Parses record metadata from a `DeriveInput`.
    ///
    /// Only structs with named fields are accepted; anything else is a
    /// compile error at the derive site.
    pub fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "can only be derived for structs",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "can only be derived for structs with named fields",
            ));
        };

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let ident = field
                .ident
                .clone()
                .expect("named fields always carry an identifier");
            fields.push(FieldMetadata {
                declared: crate::generators::type_utils::declared_type_name(&field.ty),
                mapping: MappingAttributes::from_field(field)?,
                persist: PersistAttributes::from_field(field)?,
                ident,
            });
        }

        Ok(Self {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn extracts_fields_in_declaration_order() {
        let input: DeriveInput = parse_quote! {
            struct Measurement {
                #[mapping(column = "name")]
                name: String,
                #[mapping(column = "value")]
                value: f32,
            }
        };
        let meta = RecordMetadata::from_derive_input(&input).unwrap();
        let names: Vec<String> = meta.fields.iter().map(|f| f.ident.to_string()).collect();
        assert_eq!(names, vec!["name", "value"]);
        assert_eq!(meta.fields[0].declared, "String");
        assert_eq!(meta.fields[1].declared, "f32");
    }

    #[test]
    fn rejects_enums() {
        let input: DeriveInput = parse_quote! {
            enum NotARecord { A, B }
        };
        assert!(RecordMetadata::from_derive_input(&input).is_err());
    }

    #[test]
    fn rejects_tuple_structs() {
        let input: DeriveInput = parse_quote! {
            struct NotNamed(String, f32);
        };
        assert!(RecordMetadata::from_derive_input(&input).is_err());
    }

    #[test]
    fn qualified_types_keep_their_path() {
        let input: DeriveInput = parse_quote! {
            struct Event {
                #[mapping(column = "at", time_format = "%Y-%m-%d")]
                at: chrono::NaiveDateTime,
            }
        };
        let meta = RecordMetadata::from_derive_input(&input).unwrap();
        assert_eq!(meta.fields[0].declared, "chrono::NaiveDateTime");
    }
}
