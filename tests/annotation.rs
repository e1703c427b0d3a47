//! Annotation protocol tests.

mod common;

use common::RecordingHarness;
use proptest::prelude::*;
use sqlannotation::annotation::{
    add_keyspace_id, extract_keyspace_id, is_dml, FILTERED_REPLICATION_UNFRIENDLY,
};
use sqlannotation::AnnotationError;

const DML_KEYWORD: &str =
    "([iI][nN][sS][eE][rR][tT]|[uU][pP][dD][aA][tT][eE]|[dD][eE][lL][eE][tT][eE])";

fn dml_statement() -> impl Strategy<Value = String> {
    (DML_KEYWORD, "[ \t\n]{1,2}", "[a-z0-9_=(),' ]{0,40}")
        .prop_map(|(keyword, sep, rest)| format!("{}{}{}", keyword, sep, rest))
}

fn unroutable_ids() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop_oneof![
        Just(Vec::new()),
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 2..5),
    ]
}

// ============================================================================
// Fixed cases
// ============================================================================

#[test]
fn missing_annotation_is_parse_error() {
    let err = extract_keyspace_id("UPDATE t SET x=1").unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.message().starts_with("No annotation found"));
    assert_eq!(
        err.to_string(),
        "Parse-Error. No annotation found in 'UPDATE t SET x=1'"
    );
}

#[test]
fn conflicting_annotations_are_parse_error() {
    let sql = "UPDATE t SET x=1 /* vtgate:: keyspace_id:ab */ /* vtgate:: filtered_replication_unfriendly */";
    let err = extract_keyspace_id(sql).unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.message().starts_with("Conflicting annotations"));
}

#[test]
fn conflict_detected_regardless_of_order() {
    let sql = "UPDATE t SET x=1 /* vtgate:: filtered_replication_unfriendly */ /* vtgate:: keyspace_id:ab */";
    let err = extract_keyspace_id(sql).unwrap_err();
    assert!(err.message().starts_with("Conflicting annotations"));
}

#[test]
fn invalid_hex_is_parse_error_with_source() {
    let sql = "UPDATE t SET x=1 /* vtgate:: keyspace_id:zz */";
    match extract_keyspace_id(sql).unwrap_err() {
        AnnotationError::Parse { message, source } => {
            assert!(message.starts_with("Error parsing keyspace id value in statement"));
            assert!(matches!(
                source,
                Some(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
            ));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn unfriendly_marker_is_unfriendly_error() {
    let sql = format!("DELETE FROM t {}", FILTERED_REPLICATION_UNFRIENDLY);
    let err = extract_keyspace_id(&sql).unwrap_err();
    assert!(err.is_replication_unfriendly());
    assert_eq!(err.message(), format!("Statement: {}", sql));
}

#[test]
fn empty_keyspace_id_round_trips() {
    let sql = add_keyspace_id("INSERT INTO t VALUES (1)", &[], "");
    assert_eq!(extract_keyspace_id(&sql).unwrap(), Vec::<u8>::new());
}

#[test]
fn trailing_comments_survive_extraction() {
    let sql = add_keyspace_id(
        "INSERT INTO t VALUES (1)",
        &[0xde, 0xad],
        " /* _stream t (id ) (1 ); */",
    );
    assert_eq!(extract_keyspace_id(&sql).unwrap(), vec![0xde, 0xad]);
}

#[test]
fn annotator_unfriendly_path() {
    let harness = RecordingHarness::new();
    let none: &[&[u8]] = &[];

    let sql = harness.annotator.annotate_if_dml("UPDATE t SET x=1", none);
    assert!(extract_keyspace_id(&sql).unwrap_err().is_replication_unfriendly());
    assert_eq!(harness.unfriendly_count(), 1);

    let messages = harness.logger.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("\"UPDATE t SET x=1\""));
}

#[test]
fn annotator_leaves_non_dml_alone() {
    let harness = RecordingHarness::new();
    for sql in ["SELECT * FROM t", "insert", "", "   ", "SET autocommit=0"] {
        assert_eq!(harness.annotator.annotate_if_dml(sql, &[[1u8]]), sql);
    }
    assert_eq!(harness.unfriendly_count(), 0);
    assert!(harness.logger.messages().is_empty());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn non_dml_keywords_are_not_dml(
        lead in "[ \t\n]{0,3}",
        word in "[a-zA-Z]{1,8}",
        rest in "[ \t][a-z ]{0,20}",
    ) {
        prop_assume!(!["insert", "update", "delete"]
            .iter()
            .any(|k| word.eq_ignore_ascii_case(k)));
        let sql = format!("{}{}{}", lead, word, rest);
        prop_assert!(!is_dml(&sql));
    }

    #[test]
    fn dml_keywords_are_dml(lead in "[ \t\n]{0,3}", sql in dml_statement()) {
        let statement = format!("{}{}", lead, sql);
        prop_assert!(is_dml(&statement));
    }

    #[test]
    fn single_id_round_trips(sql in dml_statement(), id in prop::collection::vec(any::<u8>(), 0..32)) {
        let harness = RecordingHarness::new();
        let annotated = harness.annotator.annotate_if_dml(&sql, &[id.clone()]);
        prop_assert_eq!(extract_keyspace_id(&annotated).unwrap(), id);
        prop_assert_eq!(harness.unfriendly_count(), 0);
    }

    #[test]
    fn unroutable_ids_are_unfriendly(sql in dml_statement(), ids in unroutable_ids()) {
        let harness = RecordingHarness::new();
        let annotated = harness.annotator.annotate_if_dml(&sql, &ids);
        prop_assert!(extract_keyspace_id(&annotated).unwrap_err().is_replication_unfriendly());
        prop_assert_eq!(harness.unfriendly_count(), 1);
    }

    #[test]
    fn non_dml_is_unchanged(sql in "\\PC{0,40}", ids in unroutable_ids()) {
        prop_assume!(!is_dml(&sql));
        let harness = RecordingHarness::new();
        prop_assert_eq!(harness.annotator.annotate_if_dml(&sql, &ids), sql);
        prop_assert_eq!(harness.unfriendly_count(), 0);
    }

    #[test]
    fn add_keyspace_id_round_trips(
        sql in "[A-Za-z0-9 =]{0,40}",
        id in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let annotated = add_keyspace_id(&sql, &id, "");
        prop_assert_eq!(extract_keyspace_id(&annotated).unwrap(), id);
    }
}
