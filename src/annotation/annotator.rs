//! Annotation of DML statements with their routing keyspace id.

use super::dml::is_dml;
use super::marker::{add_keyspace_id, add_unfriendly};
use crate::core::config::AnnotationConfig;
use crate::core::time::SystemClock;
use crate::ops::observability::{MetricsRegistry, RegistryCounter};
use crate::ops::telemetry::ThrottledLogger;
use std::fmt;
use std::sync::Arc;

/// Monotonic counter of replication-unfriendly statements.
pub trait StatementCounter: Send + Sync {
    /// Add one to the counter.
    fn increment(&self);
}

/// Sink for warnings about replication-unfriendly statements.
pub trait WarningLogger: Send + Sync {
    /// Emit a warning. Implementations may drop messages to rate-limit.
    fn warn(&self, args: fmt::Arguments<'_>);
}

/// Annotates DML statements for filtered replication.
///
/// Statements that map to exactly one keyspace id get a keyspace id
/// annotation. DML statements that map to zero or several are marked
/// replication-unfriendly, counted, and reported through the warning
/// logger.
#[derive(Clone)]
pub struct Annotator {
    unfriendly_counter: Arc<dyn StatementCounter>,
    unfriendly_logger: Arc<dyn WarningLogger>,
}

impl Annotator {
    /// Create an annotator with the given collaborators.
    pub fn new(
        unfriendly_counter: Arc<dyn StatementCounter>,
        unfriendly_logger: Arc<dyn WarningLogger>,
    ) -> Self {
        Self {
            unfriendly_counter,
            unfriendly_logger,
        }
    }

    /// Create an annotator counting into `registry` and logging through a
    /// throttled logger, both named by `config`.
    pub fn from_config(config: &AnnotationConfig, registry: Arc<MetricsRegistry>) -> Self {
        let counter = RegistryCounter::new(registry, config.unfriendly_counter.clone());
        let logger = ThrottledLogger::new(
            config.throttled_logger.clone(),
            config.log_interval(),
            Arc::new(SystemClock::new()),
        );
        Self::new(Arc::new(counter), Arc::new(logger))
    }

    /// Annotates `sql` based on `keyspace_ids`.
    ///
    /// Non-DML statements are returned unchanged. A DML statement with
    /// exactly one keyspace id is annotated with it; any other DML statement
    /// is annotated as replication-unfriendly.
    pub fn annotate_if_dml<K: AsRef<[u8]>>(&self, sql: &str, keyspace_ids: &[K]) -> String {
        if !is_dml(sql) {
            return sql.to_string();
        }
        if let [keyspace_id] = keyspace_ids {
            return add_keyspace_id(sql, keyspace_id.as_ref(), "");
        }
        self.unfriendly_counter.increment();
        self.unfriendly_logger.warn(format_args!(
            "filtered-replication-unfriendly SQL statement detected: {:?}",
            sql
        ));
        add_unfriendly(sql)
    }
}

impl fmt::Debug for Annotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotator").finish_non_exhaustive()
    }
}
