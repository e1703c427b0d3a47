//! Keyspace id extraction from annotated statements.

use super::marker::{FILTERED_REPLICATION_UNFRIENDLY, KEYSPACE_ID_PREFIX};
use crate::core::error::{AnnotationError, AnnotationResult};

/// Parses the annotation of `sql` and returns the keyspace id it carries.
///
/// Fails with [`AnnotationError::ReplicationUnfriendly`] when the statement
/// is marked unfriendly, and with [`AnnotationError::Parse`] when there is
/// no annotation, the hex value does not decode, or both annotation kinds
/// are present.
pub fn extract_keyspace_id(sql: &str) -> AnnotationResult<Vec<u8>> {
    let keyspace_id = extract_between(sql, KEYSPACE_ID_PREFIX, " ");
    let has_unfriendly = sql.contains(FILTERED_REPLICATION_UNFRIENDLY);

    match (keyspace_id, has_unfriendly) {
        (Some(_), true) => Err(AnnotationError::parse(format!(
            "Conflicting annotations in statement '{}'",
            sql
        ))),
        (Some(hex_value), false) => hex::decode(hex_value).map_err(|err| {
            AnnotationError::invalid_hex(
                format!(
                    "Error parsing keyspace id value in statement: {} ({})",
                    sql, err
                ),
                err,
            )
        }),
        (None, true) => Err(AnnotationError::replication_unfriendly(format!(
            "Statement: {}",
            sql
        ))),
        (None, false) => Err(AnnotationError::parse(format!(
            "No annotation found in '{}'",
            sql
        ))),
    }
}

/// Returns the text between the leftmost `left` and the next `right` after
/// it, or up to the end of `source` if `right` does not follow.
///
/// Returns `None` only when `left` does not occur.
fn extract_between<'a>(source: &'a str, left: &str, right: &str) -> Option<&'a str> {
    let start = source.find(left)? + left.len();
    let rest = &source[start..];
    Some(match rest.find(right) {
        Some(end) => &rest[..end],
        None => rest,
    })
}
