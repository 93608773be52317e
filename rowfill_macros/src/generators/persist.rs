//! `Persist` impl generation.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::RecordMetadata;

/// Generates the `Persist` impl over `#[persist(column = "...")]` fields.
///
/// Values go through `Value::from`, restricting tagged fields to the
/// closed value types; anything else fails to compile at the derive site.
pub fn generate(meta: &RecordMetadata) -> TokenStream {
    let ident = &meta.ident;
    let (impl_generics, ty_generics, where_clause) = meta.generics.split_for_impl();

    let tagged: Vec<_> = meta
        .fields
        .iter()
        .filter(|field| field.persist.column.is_some())
        .collect();
    let columns = tagged
        .iter()
        .map(|field| field.persist.column.as_deref().expect("filtered above"));
    let values = tagged.iter().map(|field| {
        let field_ident = &field.ident;
        quote! { ::rowfill::value::Value::from(self.#field_ident.clone()) }
    });

    quote! {
        impl #impl_generics ::rowfill::persist::Persist for #ident #ty_generics #where_clause {
            fn persist_columns() -> ::std::vec::Vec<&'static str> {
                ::std::vec![
                    #(#columns),*
                ]
            }

            fn persist_values(&self) -> ::std::vec::Vec<::rowfill::value::Value> {
                ::std::vec![
                    #(#values),*
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{DeriveInput, parse_quote};

    #[test]
    fn only_tagged_fields_are_extracted() {
        let input: DeriveInput = parse_quote! {
            struct Row {
                #[persist(column = "id")]
                id: String,
                skipped: String,
                #[persist(column = "name")]
                name: String,
            }
        };
        let meta = RecordMetadata::from_derive_input(&input).unwrap();
        let code = generate(&meta).to_string();
        assert!(code.contains("\"id\" , \"name\""));
        assert!(!code.contains("skipped"));
        assert_eq!(code.matches("Value :: from").count(), 2);
    }
}
