//! Built-in cell parsers, selected by declared field type.
//!
//! Two closed tables drive parser dispatch: scalar kinds, then named
//! special types. A declared type matching neither table is reported by
//! [`Registry::build`](crate::registry::Registry::build) as an unsupported
//! type; the tables themselves are not extensible.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::error::ParseValueError;
use crate::value::Value;

/// Options threaded into every parser call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// strftime format consumed by the timestamp parser.
    pub time_format: Option<&'static str>,
}

/// A pure cell parser: raw text in, typed [`Value`] out.
pub type ParserFn = fn(&str, &ParseOptions) -> Result<Value, ParseValueError>;

/// Scalar kinds decodable with no annotation beyond the column key.
const SCALAR_PARSERS: &[(&str, ParserFn)] = &[
    ("String", parse_string),
    ("i64", parse_int),
    ("f32", parse_float32),
];

/// Named special types. Both the bare and the qualified spelling of each
/// type name resolve to the same parser.
const SPECIAL_PARSERS: &[(&str, ParserFn)] = &[
    ("Uuid", parse_uuid),
    ("uuid::Uuid", parse_uuid),
    ("NaiveDateTime", parse_timestamp),
    ("chrono::NaiveDateTime", parse_timestamp),
];

/// Looks up the parser for a declared type name, scalars first.
pub(crate) fn parser_for(declared: &str) -> Option<ParserFn> {
    lookup(SCALAR_PARSERS, declared).or_else(|| lookup(SPECIAL_PARSERS, declared))
}

fn lookup(table: &[(&str, ParserFn)], declared: &str) -> Option<ParserFn> {
    table
        .iter()
        .find(|(name, _)| *name == declared)
        .map(|(_, parser)| *parser)
}

fn parse_string(raw: &str, _opt: &ParseOptions) -> Result<Value, ParseValueError> {
    Ok(Value::Str(raw.to_owned()))
}

fn parse_int(raw: &str, _opt: &ParseOptions) -> Result<Value, ParseValueError> {
    Ok(Value::Int(raw.parse::<i64>()?))
}

/// 32-bit floats are parsed at 64-bit precision, then narrowed.
fn parse_float32(raw: &str, _opt: &ParseOptions) -> Result<Value, ParseValueError> {
    let wide = raw.parse::<f64>()?;
    Ok(Value::Float(wide as f32))
}

fn parse_uuid(raw: &str, _opt: &ParseOptions) -> Result<Value, ParseValueError> {
    Ok(Value::Uuid(Uuid::parse_str(raw)?))
}

/// Timestamps require the co-located time format annotation. A date-only
/// format resolves to midnight.
fn parse_timestamp(raw: &str, opt: &ParseOptions) -> Result<Value, ParseValueError> {
    let format = opt.time_format.ok_or(ParseValueError::MissingTimeFormat)?;
    match NaiveDateTime::parse_from_str(raw, format) {
        Ok(ts) => Ok(Value::Timestamp(ts)),
        Err(err) => match NaiveDate::parse_from_str(raw, format) {
            Ok(date) => Ok(Value::Timestamp(date.and_time(NaiveTime::MIN))),
            Err(_) => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn scalar_table_covers_builtins() {
        for declared in ["String", "i64", "f32"] {
            assert!(parser_for(declared).is_some(), "no parser for {declared}");
        }
    }

    #[test]
    fn special_table_accepts_both_spellings() {
        assert!(parser_for("Uuid").is_some());
        assert!(parser_for("uuid::Uuid").is_some());
        assert!(parser_for("NaiveDateTime").is_some());
        assert!(parser_for("chrono::NaiveDateTime").is_some());
    }

    #[test]
    fn unknown_types_have_no_parser() {
        assert!(parser_for("i32").is_none());
        assert!(parser_for("Vec<u8>").is_none());
    }

    #[test]
    fn string_passthrough() {
        let opt = ParseOptions::default();
        assert_eq!(
            parse_string("Marty McFly", &opt).unwrap(),
            Value::Str("Marty McFly".to_owned())
        );
    }

    #[test]
    fn int_is_base_10() {
        let opt = ParseOptions::default();
        assert_eq!(parse_int("100", &opt).unwrap(), Value::Int(100));
        assert!(parse_int("0x10", &opt).is_err());
    }

    #[test]
    fn float32_narrows_from_f64() {
        let opt = ParseOptions::default();
        assert_eq!(parse_float32("123.4", &opt).unwrap(), Value::Float(123.4));
    }

    #[test]
    fn uuid_round_trips() {
        let opt = ParseOptions::default();
        let value = parse_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8", &opt).unwrap();
        assert_eq!(value.kind(), ValueKind::Uuid);
    }

    #[test]
    fn timestamp_requires_format() {
        let opt = ParseOptions::default();
        assert!(matches!(
            parse_timestamp("2015-10-21", &opt),
            Err(ParseValueError::MissingTimeFormat)
        ));
    }

    #[test]
    fn timestamp_date_only_resolves_to_midnight() {
        let opt = ParseOptions {
            time_format: Some("%Y-%m-%d"),
        };
        let value = parse_timestamp("2015-10-21", &opt).unwrap();
        let expected = NaiveDate::from_ymd_opt(2015, 10, 21)
            .unwrap()
            .and_time(NaiveTime::MIN);
        assert_eq!(value, Value::Timestamp(expected));
    }

    #[test]
    fn timestamp_full_datetime() {
        let opt = ParseOptions {
            time_format: Some("%Y-%m-%d %H:%M"),
        };
        let value = parse_timestamp("2015-10-21 07:28", &opt).unwrap();
        let expected = NaiveDate::from_ymd_opt(2015, 10, 21)
            .unwrap()
            .and_hms_opt(7, 28, 0)
            .unwrap();
        assert_eq!(value, Value::Timestamp(expected));
    }
}
