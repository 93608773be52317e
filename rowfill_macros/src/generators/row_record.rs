//! `RowRecord` impl generation.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::RecordMetadata;

/// Generates the `RowRecord` impl: one `FieldSpec` per column-bound field,
/// in declaration order.
///
/// The write function assigns through `TryFrom<Value>`, so the field's own
/// type drives the conversion and a kind mismatch surfaces as a decode
/// error rather than a panic.
pub fn generate(meta: &RecordMetadata) -> TokenStream {
    let ident = &meta.ident;
    let (impl_generics, ty_generics, where_clause) = meta.generics.split_for_impl();

    let specs = meta.fields.iter().filter_map(|field| {
        let column = field.mapping.column.as_deref()?;
        let field_ident = &field.ident;
        let field_name = field.ident.to_string();
        let declared = &field.declared;

        let mut spec = quote! {
            ::rowfill::registry::FieldSpec::new(
                #field_name,
                #declared,
                |record: &mut Self, value: ::rowfill::value::Value| {
                    record.#field_ident = ::core::convert::TryFrom::try_from(value)?;
                    Ok(())
                },
            )
            .column(#column)
        };
        if let Some(default) = field.mapping.default.as_deref() {
            spec.extend(quote! { .default_value(#default) });
        }
        if let Some(format) = field.mapping.time_format.as_deref() {
            spec.extend(quote! { .time_format(#format) });
        }
        Some(spec)
    });

    quote! {
        impl #impl_generics ::rowfill::registry::RowRecord for #ident #ty_generics #where_clause {
            fn field_specs() -> ::std::vec::Vec<::rowfill::registry::FieldSpec<Self>> {
                ::std::vec![
                    #(#specs),*
                ]
            }
        }
    }
}
