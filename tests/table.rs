//! Branch tables loaded from TOML files.

use std::collections::BTreeMap;

use keymatch::table::{load_table, load_table_covering, ValidationError};
use keymatch::{BranchTable, MatchError, TableError};

mod common;

#[test]
fn test_load_and_resolve() {
    common::init_tracing();
    let table_file = common::write_temp_table(
        "routes.toml",
        r#"
        a = "v1"
        b = "v2"
        _default = "d"
        "#,
    );

    let table: BranchTable<String> = load_table(table_file.path()).unwrap();
    assert_eq!(table.resolve("a"), Ok("v1".to_string()));
    assert_eq!(table.resolve("c"), Ok("d".to_string()));
}

#[test]
fn test_required_keys_without_default() {
    common::init_tracing();
    let table_file = common::write_temp_table("levels.toml", "low = 1\nhigh = 3\n");

    let err = load_table_covering::<u32>(table_file.path(), &["low", "medium", "high"]).unwrap_err();
    match err {
        TableError::Validation(errors) => {
            assert_eq!(errors, vec![ValidationError::Uncovered("medium".into())]);
        }
        other => panic!("unexpected error: {other}"),
    }

    let table = load_table_covering::<u32>(table_file.path(), &["low", "high"]).unwrap();
    assert_eq!(
        table.resolve("medium"),
        Err(MatchError::UnmatchedKey { key: "\"medium\"".into() })
    );
}

#[test]
fn test_default_satisfies_required_keys() {
    let table_file = common::write_temp_table("levels.toml", "low = 1\n_default = 0\n");
    let table = load_table_covering::<u32>(table_file.path(), &["low", "medium"]).unwrap();
    assert_eq!(table.resolve("medium"), Ok(0));
}

#[test]
fn test_table_extended_with_producers() {
    let table_file = common::write_temp_table("greetings.toml", "en = \"hello\"\nfr = \"bonjour\"\n");
    let table: BranchTable<String> = load_table(table_file.path()).unwrap();

    let (branches, default) = table.into_parts();
    assert!(default.is_none());

    let greeting = branches
        .on_with("de".to_string(), || "hallo".to_string())
        .otherwise("hi".to_string())
        .resolve("de");
    assert_eq!(greeting, "hallo");
}

#[test]
fn test_temp_table_removed_after_use() {
    let table_file = common::write_temp_table("scratch.toml", "k = 1\n");
    let dir = table_file.dir().to_path_buf();
    let table: BranchTable<u8> = load_table(table_file.path()).unwrap();
    assert_eq!(table.resolve("k"), Ok(1));

    drop(table_file);
    assert!(!dir.exists());
}

#[test]
fn test_reserved_key_survives_round_trip() {
    let mut table: BranchTable<i64> = BranchTable::new();
    table.insert("a", 1);
    table.insert("_default", 9);
    let before = table.resolve("z");

    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(json, r#"{"_default":9,"a":1}"#);

    let reparsed: BranchTable<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed.resolve("z"), before);
    assert_eq!(reparsed, table);
}

#[test]
fn test_json_tables() {
    let table: BranchTable<i64> =
        serde_json::from_str(r#"{ "x": 1, "y": 2, "_default": 0 }"#).unwrap();
    assert_eq!(table.resolve("y"), Ok(2));
    assert_eq!(table.resolve("z"), Ok(0));

    let round_trip = serde_json::to_value(&table).unwrap();
    assert_eq!(round_trip["_default"], 0);
}

#[test]
fn test_serialize_omits_missing_default() {
    let table: BranchTable<u8> = BTreeMap::from([("k".to_string(), 1u8)]).into_iter().collect();
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(json, r#"{"k":1}"#);
}
