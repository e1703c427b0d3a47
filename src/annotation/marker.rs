//! Annotation comment formats.
//!
//! Exact bytes matter: statements annotated by one process are parsed by
//! another during filtered replication.

/// Opening delimiter of a keyspace id annotation. The hex value follows
/// immediately and runs up to the next space.
pub const KEYSPACE_ID_PREFIX: &str = "/* vtgate:: keyspace_id:";

/// Closing delimiter of a keyspace id annotation, including the space that
/// terminates the hex value.
pub const KEYSPACE_ID_SUFFIX: &str = " */";

/// Marks a DML statement that does not map to exactly one keyspace id.
pub const FILTERED_REPLICATION_UNFRIENDLY: &str = "/* vtgate:: filtered_replication_unfriendly */";

/// Returns a copy of `sql` annotated with the given keyspace id, followed by
/// `trailing_comments` verbatim.
///
/// No separator is inserted between the annotation and `trailing_comments`;
/// the parser stops the hex value at the first space, so trailing comments
/// should start with whitespace.
pub fn add_keyspace_id(sql: &str, keyspace_id: &[u8], trailing_comments: &str) -> String {
    format!(
        "{} {}{}{}{}",
        sql,
        KEYSPACE_ID_PREFIX,
        hex::encode(keyspace_id),
        KEYSPACE_ID_SUFFIX,
        trailing_comments
    )
}

/// Returns a copy of `sql` annotated as filtered-replication-unfriendly.
pub fn add_unfriendly(sql: &str) -> String {
    format!("{} {}", sql, FILTERED_REPLICATION_UNFRIENDLY)
}
