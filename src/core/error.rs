//! Error types for annotation parsing.
//!
//! Extraction failures come in exactly two kinds. A parse error means the
//! annotation is missing, malformed or contradicts itself. A
//! replication-unfriendly error means the annotation was read correctly and
//! says the statement has no single keyspace id; callers are expected to
//! branch on it rather than treat it as corruption.

use thiserror::Error;

/// Failure to recover a keyspace id from an annotated statement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnotationError {
    /// Missing, malformed or conflicting annotation data.
    #[error("Parse-Error. {message}")]
    Parse {
        message: String,
        /// Hex decoding failure of the captured keyspace id, if that is what failed.
        #[source]
        source: Option<hex::FromHexError>,
    },

    /// The statement was annotated as filtered-replication-unfriendly.
    #[error("Statement is filtered-replication-unfriendly. {message}")]
    ReplicationUnfriendly { message: String },
}

impl AnnotationError {
    /// Create a parse error with no underlying cause.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a parse error caused by a hex decoding failure.
    pub fn invalid_hex(message: impl Into<String>, source: hex::FromHexError) -> Self {
        Self::Parse {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a replication-unfriendly error.
    pub fn replication_unfriendly(message: impl Into<String>) -> Self {
        Self::ReplicationUnfriendly {
            message: message.into(),
        }
    }

    /// Check if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if the statement was marked replication-unfriendly.
    pub fn is_replication_unfriendly(&self) -> bool {
        matches!(self, Self::ReplicationUnfriendly { .. })
    }

    /// The descriptive message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Parse { message, .. } | Self::ReplicationUnfriendly { message } => message,
        }
    }
}

/// Result type using AnnotationError.
pub type AnnotationResult<T> = Result<T, AnnotationError>;
