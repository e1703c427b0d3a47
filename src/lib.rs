//! sqlannotation - keyspace id annotations on SQL DML statements.
//!
//! Filtered replication routes each DML statement read from the binlog to
//! the shard that owns it. The routing key travels inside the statement as a
//! trailing comment written when the statement is generated:
//!
//! ```text
//! INSERT INTO t (id) VALUES (7) /* vtgate:: keyspace_id:166b40b44aba4bd6 */
//! DELETE FROM t WHERE a > 3 /* vtgate:: filtered_replication_unfriendly */
//! ```
//!
//! The second form marks a statement that touches zero or several keyspace
//! ids and so cannot be routed to a single shard.
//!
//! # Module Organization
//!
//! - [`annotation`] - Annotating statements and extracting keyspace ids
//! - [`binlog`] - Binlog transaction and statement model
//! - [`core::config`] - Configuration parsing and validation
//! - [`core::error`] - Error types
//! - [`core::time`] - Clock abstraction
//! - [`ops::observability`] - Counter registry
//! - [`ops::telemetry`] - Tracing setup and throttled logger
//! - [`cli`] - CLI command implementations
//!
//! # Example
//!
//! ```
//! use sqlannotation::annotation::{add_keyspace_id, extract_keyspace_id};
//!
//! let sql = add_keyspace_id("UPDATE t SET a = 1 WHERE id = 7", &[0x16, 0x6b], "");
//! assert_eq!(sql, "UPDATE t SET a = 1 WHERE id = 7 /* vtgate:: keyspace_id:166b */");
//! assert_eq!(extract_keyspace_id(&sql).unwrap(), vec![0x16, 0x6b]);
//! ```

// Core infrastructure
pub mod core;

// Annotation protocol
pub mod annotation;

// Binlog statement model
pub mod binlog;

// Operations and observability
pub mod ops;

// CLI
pub mod cli;

// Re-exports for convenience
pub use self::core::error::{AnnotationError, AnnotationResult};
pub use self::core::{config, error, time};
pub use annotation::{add_keyspace_id, extract_keyspace_id, is_dml, Annotator};
pub use ops::{observability, telemetry};
