//! Column-tagged field registry and row decoder.
//!
//! A [`Registry`] is built once per record type from its [`FieldSpec`]s and
//! reused across decode calls. Construction is all-or-nothing: a field whose
//! declared type has no parser aborts the build, a partial registry is never
//! returned. Once built the registry is read-only and may be shared across
//! readers, provided construction happens-before any concurrent read.

use std::any::type_name;

use log::{debug, trace};

use crate::error::{DecodeError, RegistryError, ValueTypeError};
use crate::header::HeaderIndex;
use crate::parse::{ParseOptions, ParserFn, parser_for};
use crate::value::Value;

/// Stores a decoded [`Value`] into its field on the record.
pub type WriteFn<T> = fn(&mut T, Value) -> Result<(), ValueTypeError>;

/// Per-field structural description feeding [`Registry::from_specs`].
///
/// Produced by `#[derive(RowRecord)]` from field attributes, or hand-built
/// through [`FieldSpec::new`] for explicit registration:
///
/// ```rust,ignore
/// let specs = vec![
///     FieldSpec::new("score", "i64", |r: &mut Scores, v| {
///         r.score = v.try_into()?;
///         Ok(())
///     })
///     .column("score")
///     .default_value("100"),
/// ];
/// let registry = Registry::from_specs(specs)?;
/// ```
#[derive(Clone)]
pub struct FieldSpec<T> {
    field: &'static str,
    declared: &'static str,
    write: WriteFn<T>,
    column: Option<&'static str>,
    default: Option<&'static str>,
    time_format: Option<&'static str>,
}

impl<T> FieldSpec<T> {
    pub fn new(field: &'static str, declared: &'static str, write: WriteFn<T>) -> Self {
        Self {
            field,
            declared,
            write,
            column: None,
            default: None,
            time_format: None,
        }
    }

    /// Binds the field to a column key. Unbound fields do not participate
    /// in decoding.
    pub fn column(mut self, key: &'static str) -> Self {
        self.column = Some(key);
        self
    }

    /// Fallback literal, stored verbatim and parsed like live input at
    /// decode time.
    pub fn default_value(mut self, literal: &'static str) -> Self {
        self.default = Some(literal);
        self
    }

    /// strftime format consumed by the timestamp parser.
    pub fn time_format(mut self, format: &'static str) -> Self {
        self.time_format = Some(format);
        self
    }
}

/// A record type decodable from tabular rows.
///
/// Implemented by `#[derive(RowRecord)]`, which emits one [`FieldSpec`] per
/// `#[mapping(column = "...")]` field, in declaration order.
pub trait RowRecord: Sized {
    fn field_specs() -> Vec<FieldSpec<Self>>;
}

/// One column's decode plan: parser, options, default and write target.
#[derive(Debug)]
struct ParseDefinition<T> {
    field: &'static str,
    column: &'static str,
    parser: ParserFn,
    options: ParseOptions,
    default: Option<&'static str>,
    write: WriteFn<T>,
}

/// Column-key → decode-plan mapping for one record type.
///
/// Definitions keep field declaration order, so decode errors are reported
/// reproducibly for a given (registry, header, row) triple.
#[derive(Debug)]
pub struct Registry<T> {
    defs: Vec<ParseDefinition<T>>,
}

impl<T: RowRecord> Registry<T> {
    /// Builds the registry from the type's derived field specs.
    pub fn build() -> Result<Self, RegistryError> {
        Self::from_specs(T::field_specs())
    }
}

impl<T> Registry<T> {
    /// Explicit-registration constructor for types without the derive.
    ///
    /// Specs without a column binding are skipped; a bound spec whose
    /// declared type matches neither parser table fails the whole build.
    pub fn from_specs(specs: Vec<FieldSpec<T>>) -> Result<Self, RegistryError> {
        let mut defs = Vec::with_capacity(specs.len());
        for spec in specs {
            let Some(column) = spec.column else {
                continue;
            };
            let parser = parser_for(spec.declared).ok_or(RegistryError::UnsupportedType {
                field: spec.field,
                declared: spec.declared,
            })?;
            defs.push(ParseDefinition {
                field: spec.field,
                column,
                parser,
                options: ParseOptions {
                    time_format: spec.time_format,
                },
                default: spec.default,
                write: spec.write,
            });
        }
        debug!(
            "registry for {}: {} column definitions",
            type_name::<T>(),
            defs.len()
        );
        Ok(Self { defs })
    }

    /// Number of column definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Column keys in field declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defs.iter().map(|def| def.column)
    }

    /// Decodes one row into `dest`, fields in declaration order.
    ///
    /// Mutation is not transactional: fields written before a later failure
    /// stay written. Header and row lengths are never cross-validated; a
    /// cell position beyond the row end resolves like an absent column.
    pub fn decode<S: AsRef<str>>(
        &self,
        dest: &mut T,
        header: &HeaderIndex,
        row: &[S],
    ) -> Result<(), DecodeError> {
        for def in &self.defs {
            def.apply(dest, header, row)?;
        }
        Ok(())
    }
}

impl<T> ParseDefinition<T> {
    fn apply<S: AsRef<str>>(
        &self,
        dest: &mut T,
        header: &HeaderIndex,
        row: &[S],
    ) -> Result<(), DecodeError> {
        let cell = header.position(self.column).and_then(|i| row.get(i));
        let cell_err = match cell {
            Some(raw) => match (self.parser)(raw.as_ref(), &self.options) {
                Ok(value) => return self.store(dest, value),
                Err(err) => Some(err),
            },
            None => None,
        };

        if let Some(literal) = self.default {
            trace!("column {}: falling back to default {literal:?}", self.column);
            return match (self.parser)(literal, &self.options) {
                Ok(value) => self.store(dest, value),
                Err(source) => Err(DecodeError::MalformedDefault {
                    column: self.column.to_owned(),
                    value: literal.to_owned(),
                    source,
                }),
            };
        }

        match cell_err {
            Some(source) => Err(DecodeError::Cell {
                column: self.column.to_owned(),
                source,
            }),
            None => Err(DecodeError::MissingColumn(self.column.to_owned())),
        }
    }

    fn store(&self, dest: &mut T, value: Value) -> Result<(), DecodeError> {
        (self.write)(dest, value).map_err(|source| DecodeError::Mismatch {
            field: self.field,
            source,
        })
    }
}

/// One-shot convenience: builds the registry, decodes a single row.
///
/// Callers decoding many rows should build the [`Registry`] once and reuse
/// it.
pub fn decode_row<T: RowRecord, S: AsRef<str>>(
    dest: &mut T,
    header: &[S],
    row: &[S],
) -> crate::error::RowfillResult<()> {
    let registry = Registry::<T>::build()?;
    let index = HeaderIndex::new(header);
    registry.decode(dest, &index, row)?;
    Ok(())
}
