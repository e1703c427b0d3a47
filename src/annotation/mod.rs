//! Keyspace id annotations on SQL DML statements.
//!
//! During filtered replication each DML statement read from the binlog is
//! routed to the shard owning its keyspace id. The id travels inside the
//! statement as a trailing comment:
//!
//! ```text
//! UPDATE t SET a = 1 WHERE id = 7 /* vtgate:: keyspace_id:166b40b44aba4bd6 */
//! ```
//!
//! Statements that touch zero or several keyspace ids cannot be routed this
//! way and carry `/* vtgate:: filtered_replication_unfriendly */` instead.
//!
//! - [`annotator`] - Annotating statements at generation time
//! - [`extract`] - Recovering the keyspace id at replication time
//! - [`dml`] - DML classification
//! - [`marker`] - Comment formats

pub mod annotator;
pub mod dml;
pub mod extract;
pub mod marker;

pub use annotator::{Annotator, StatementCounter, WarningLogger};
pub use dml::{dml_kind, is_dml, DmlKind};
pub use extract::extract_keyspace_id;
pub use marker::{add_keyspace_id, FILTERED_REPLICATION_UNFRIENDLY, KEYSPACE_ID_PREFIX};
