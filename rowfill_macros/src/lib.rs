use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod generators;
mod parse;

/// Derives the `RowRecord` trait for a struct, enabling it to be decoded
/// from tabular rows.
///
/// The macro generates `field_specs()`, emitting one `FieldSpec` per field
/// carrying a `#[mapping(column = "...")]` attribute, in declaration
/// order. Fields without the attribute do not participate in decoding.
///
/// # Attributes
///
/// - `#[mapping(column = "...")]` - **Required** for participation. Binds
///   the field to a column key in the row header.
/// - `#[mapping(default = "...")]` - **Optional**. Fallback literal used
///   when the column is absent or the cell fails to parse; stored
///   verbatim and parsed like live input at decode time.
/// - `#[mapping(time_format = "...")]` - strftime format, **required** for
///   timestamp fields and ignored by every other parser.
///
/// The three keys may be combined in one attribute:
/// `#[mapping(column = "date", time_format = "%Y-%m-%d")]`.
///
/// # Supported Field Types
///
/// The parser tables are closed: `String`, `i64`, `f32`, `uuid::Uuid` and
/// `chrono::NaiveDateTime` (bare or qualified spelling). Binding a column
/// to any other type fails registry construction with an unsupported-type
/// error.
///
/// # Examples
///
/// ```rust,ignore
/// use rowfill::prelude::*;
///
/// #[derive(RowRecord, Default)]
/// pub struct Measurement {
///     #[mapping(column = "name")]
///     pub name: String,
///     #[mapping(column = "value")]
///     pub value: f32,
///     #[mapping(column = "date", time_format = "%Y-%m-%d")]
///     pub date: chrono::NaiveDateTime,
///     #[mapping(column = "score", default = "100")]
///     pub score: i64,
/// }
/// ```
#[proc_macro_derive(RowRecord, attributes(mapping))]
pub fn derive_row_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match parse::RecordMetadata::from_derive_input(&input) {
        Ok(meta) => generators::row_record::generate(&meta).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derives the `Persist` trait, extracting ordered column-name and value
/// lists from a tagged instance for downstream persistence code.
///
/// Only fields carrying `#[persist(column = "...")]` are extracted, in
/// declaration order. The attribute namespace is independent of
/// `#[mapping]`; a field may carry either, both or neither.
///
/// Field values are converted through `Value::from`, so tagged fields must
/// be one of the closed value types (`String`, `i64`, `f32`, `uuid::Uuid`,
/// `chrono::NaiveDateTime`).
///
/// # Examples
///
/// ```rust,ignore
/// use rowfill::prelude::*;
///
/// #[derive(Persist)]
/// pub struct Row {
///     #[persist(column = "id")]
///     pub id: String,
///     #[persist(column = "name")]
///     pub name: String,
/// }
/// ```
#[proc_macro_derive(Persist, attributes(persist))]
pub fn derive_persist(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match parse::RecordMetadata::from_derive_input(&input) {
        Ok(meta) => generators::persist::generate(&meta).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
