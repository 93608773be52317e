//! Field correspondence between two record shapes.

use std::collections::HashMap;

use heck::ToSnakeCase;
use log::trace;

use crate::shape::{FieldDescriptor, RecordShape};

/// A validated destination/source field binding, carrying each side's
/// original name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub dest: String,
    pub src: String,
}

/// Normalizes a field name into its case- and delimiter-insensitive
/// matching key.
///
/// ```
/// use rowfill_codegen::matcher::canonical_key;
///
/// assert_eq!(canonical_key("ID"), canonical_key("id"));
/// assert_eq!(canonical_key("ShortName"), canonical_key("short_name"));
/// ```
pub fn canonical_key(name: &str) -> String {
    name.to_snake_case()
}

/// Computes correspondence pairs, ordered by destination declaration
/// order.
///
/// Non-public fields are excluded on both sides. When two source fields
/// collapse to the same canonical key, the later declaration wins the
/// lookup slot; the ambiguity is accepted, not validated. A pair is
/// dropped when both declared type names are known and differ textually.
/// Shapes with no overlap produce an empty vector, not an error.
pub fn make_pairs(dest: &RecordShape, src: &RecordShape) -> Vec<Pair> {
    let mut lookup: HashMap<String, &FieldDescriptor> = HashMap::with_capacity(src.fields.len());
    for field in &src.fields {
        if !field.is_public {
            continue;
        }
        lookup.insert(canonical_key(&field.name), field);
    }

    let mut pairs = Vec::with_capacity(dest.fields.len());
    for field in &dest.fields {
        if !field.is_public {
            continue;
        }
        let Some(matched) = lookup.get(canonical_key(&field.name).as_str()) else {
            continue;
        };
        if let (Some(d), Some(s)) = (&field.declared_type, &matched.declared_type) {
            if d != s {
                trace!(
                    "skipping {}: declared types differ ({d} vs {s})",
                    field.name
                );
                continue;
            }
        }
        pairs.push(Pair {
            dest: field.name.clone(),
            src: matched.name.clone(),
        });
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, declared: Option<&str>) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_owned(),
            declared_type: declared.map(str::to_owned),
            is_public: true,
        }
    }

    fn private(name: &str, declared: Option<&str>) -> FieldDescriptor {
        FieldDescriptor {
            is_public: false,
            ..field(name, declared)
        }
    }

    fn shape(name: &str, fields: Vec<FieldDescriptor>) -> RecordShape {
        RecordShape {
            name: name.to_owned(),
            fields,
        }
    }

    #[test]
    fn canonicalization_is_case_and_delimiter_insensitive() {
        for name in ["ID", "Id", "id"] {
            assert_eq!(canonical_key(name), "id");
        }
        for name in ["ShortName", "shortName", "short_name"] {
            assert_eq!(canonical_key(name), "short_name");
        }
    }

    #[test]
    fn matches_by_canonical_key_in_destination_order() {
        let dest = shape(
            "User",
            vec![
                field("ID", Some("String")),
                field("Name", Some("String")),
                field("Date", Some("chrono::NaiveDateTime")),
            ],
        );
        let src = shape(
            "LegacyUser",
            vec![field("Id", Some("String")), field("Name", Some("String"))],
        );
        let pairs = make_pairs(&dest, &src);
        assert_eq!(
            pairs,
            vec![
                Pair {
                    dest: "ID".into(),
                    src: "Id".into()
                },
                Pair {
                    dest: "Name".into(),
                    src: "Name".into()
                },
            ]
        );
    }

    #[test]
    fn non_public_fields_never_match() {
        let dest = shape(
            "User",
            vec![field("id", Some("String")), private("Name", Some("String"))],
        );
        let src = shape(
            "LegacyUser",
            vec![private("Id", Some("String")), field("Name", Some("String"))],
        );
        assert!(make_pairs(&dest, &src).is_empty());
    }

    #[test]
    fn differing_declared_types_reject_the_pair() {
        let dest = shape("User", vec![field("Id", Some("String"))]);
        let src = shape("LegacyUser", vec![field("Id", Some("i64"))]);
        assert!(make_pairs(&dest, &src).is_empty());
    }

    #[test]
    fn unknown_declared_type_on_either_side_passes_the_gate() {
        let dest = shape("User", vec![field("Data", None)]);
        let src = shape("LegacyUser", vec![field("Data", Some("String"))]);
        assert_eq!(make_pairs(&dest, &src).len(), 1);
    }

    #[test]
    fn later_source_duplicate_wins_the_lookup_slot() {
        let dest = shape("User", vec![field("ShortName", Some("String"))]);
        let src = shape(
            "LegacyUser",
            vec![
                field("short_name", Some("String")),
                field("shortName", Some("String")),
            ],
        );
        let pairs = make_pairs(&dest, &src);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].src, "shortName");
    }

    #[test]
    fn non_overlapping_shapes_yield_an_empty_vector() {
        let dest = shape("User", vec![field("Id", Some("String"))]);
        let src = shape("LegacyUser", vec![field("Email", Some("String"))]);
        assert!(make_pairs(&dest, &src).is_empty());
    }
}
