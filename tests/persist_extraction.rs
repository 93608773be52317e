//! `#[derive(Persist)]` column/value extraction.

use rowfill::prelude::*;

#[derive(Persist, Debug, Default)]
pub struct Account {
    #[persist(column = "id")]
    pub id: String,
    pub session_token: String,
    #[persist(column = "balance")]
    pub balance: i64,
    #[persist(column = "updated_at")]
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(RowRecord, Persist, Debug, Default)]
pub struct Mixed {
    // Decoded under one key, persisted under another.
    #[mapping(column = "name")]
    #[persist(column = "display_name")]
    pub name: String,
}

#[test]
fn columns_follow_declaration_order() {
    assert_eq!(
        Account::persist_columns(),
        vec!["id", "balance", "updated_at"]
    );
}

#[test]
fn values_align_with_columns() {
    let account = Account {
        id: "a-1".into(),
        session_token: "ephemeral".into(),
        balance: 88,
        updated_at: chrono::NaiveDateTime::default(),
    };
    let values = account.persist_values();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0], Value::Str("a-1".into()));
    assert_eq!(values[1], Value::Int(88));
    assert_eq!(values[2].kind(), ValueKind::Timestamp);
}

#[test]
fn mapping_and_persist_namespaces_are_independent() {
    assert_eq!(Mixed::persist_columns(), vec!["display_name"]);

    let registry = Registry::<Mixed>::build().unwrap();
    assert_eq!(registry.columns().collect::<Vec<_>>(), vec!["name"]);
}
