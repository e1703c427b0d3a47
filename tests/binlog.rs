//! Binlog model tests.

use sqlannotation::binlog::{BinlogTransaction, GtidField, Statement, StatementCategory};
use sqlannotation::{add_keyspace_id, extract_keyspace_id};

fn transaction() -> BinlogTransaction {
    BinlogTransaction {
        statements: vec![
            Statement::new(StatementCategory::Set, "SET TIMESTAMP=1400000000"),
            Statement::new(StatementCategory::Begin, "BEGIN"),
            Statement::new(
                StatementCategory::Dml,
                add_keyspace_id("INSERT INTO t VALUES (1)", &[0x80], ""),
            ),
            Statement::new(
                StatementCategory::Dml,
                "UPDATE t SET a=1 /* vtgate:: filtered_replication_unfriendly */",
            ),
            Statement::new(StatementCategory::Dml, "DELETE FROM t"),
            Statement::new(StatementCategory::Commit, "COMMIT"),
        ],
        timestamp: 1_400_000_000,
        gtid_field: GtidField::new("MariaDB/0-41983-20"),
    }
}

#[test]
fn dml_statements_in_order() {
    let txn = transaction();
    let dml: Vec<_> = txn.dml_statements().collect();
    assert_eq!(dml.len(), 3);
    assert!(dml[0].sql_text().starts_with("INSERT"));
    assert!(dml[2].sql_text().starts_with("DELETE"));
}

#[test]
fn routing_outcome_per_statement() {
    let txn = transaction();
    let outcomes: Vec<_> = txn.dml_statements().map(|s| s.keyspace_id()).collect();

    assert_eq!(outcomes[0].as_ref().unwrap(), &vec![0x80]);
    assert!(outcomes[1].as_ref().unwrap_err().is_replication_unfriendly());
    assert!(outcomes[2].as_ref().unwrap_err().is_parse_error());
}

#[test]
fn statement_keyspace_id_matches_text_extraction() {
    let txn = transaction();
    for stmt in txn.dml_statements() {
        assert_eq!(stmt.keyspace_id(), extract_keyspace_id(&stmt.sql_text()));
    }
}

#[test]
fn json_round_trip() {
    let txn = transaction();
    let json = serde_json::to_string(&txn).unwrap();
    assert_eq!(BinlogTransaction::from_json(&json).unwrap(), txn);
}

#[test]
fn missing_optional_fields_default() {
    let txn = BinlogTransaction::from_json(r#"{"statements": []}"#).unwrap();
    assert_eq!(txn.timestamp, 0);
    assert!(txn.gtid_field.is_empty());
}
