//! Transactions and statements as read from the binlog.

use crate::annotation::extract_keyspace_id;
use crate::core::error::AnnotationResult;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Statement category in the binlog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum StatementCategory {
    Unrecognized = 0,
    Begin = 1,
    Commit = 2,
    Rollback = 3,
    Dml = 4,
    Ddl = 5,
    Set = 6,
}

impl StatementCategory {
    /// Numeric code of this category.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for StatementCategory {
    type Error = UnknownCategory;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unrecognized),
            1 => Ok(Self::Begin),
            2 => Ok(Self::Commit),
            3 => Ok(Self::Rollback),
            4 => Ok(Self::Dml),
            5 => Ok(Self::Ddl),
            6 => Ok(Self::Set),
            other => Err(UnknownCategory(other)),
        }
    }
}

impl From<StatementCategory> for i32 {
    fn from(category: StatementCategory) -> Self {
        category.code()
    }
}

impl std::fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unrecognized => "UNRECOGNIZED",
            Self::Begin => "BEGIN",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
            Self::Dml => "DML",
            Self::Ddl => "DDL",
            Self::Set => "SET",
        };
        f.write_str(name)
    }
}

/// Category code outside the known range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown statement category: {0}")]
pub struct UnknownCategory(pub i32);

/// One statement as read from the binlog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement category.
    pub category: StatementCategory,
    /// Raw statement text.
    pub sql: Vec<u8>,
}

impl Statement {
    /// Create a statement.
    pub fn new(category: StatementCategory, sql: impl Into<Vec<u8>>) -> Self {
        Self {
            category,
            sql: sql.into(),
        }
    }

    /// Statement text. Invalid UTF-8 is replaced.
    pub fn sql_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.sql)
    }

    /// Check if this is a DML statement.
    pub fn is_dml(&self) -> bool {
        self.category == StatementCategory::Dml
    }

    /// Keyspace id from the statement's annotation.
    pub fn keyspace_id(&self) -> AnnotationResult<Vec<u8>> {
        extract_keyspace_id(&self.sql_text())
    }
}

/// Replication position, opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GtidField(pub String);

impl GtidField {
    /// Wrap a GTID string.
    pub fn new(gtid: impl Into<String>) -> Self {
        Self(gtid.into())
    }

    /// The GTID as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if no position is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for GtidField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One transaction as read from the binlog.
///
/// `timestamp` is set if the first statement was something like
/// `SET TIMESTAMP=...`, and is zero otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinlogTransaction {
    /// Statements in binlog order.
    pub statements: Vec<Statement>,
    /// Seconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: i64,
    /// Position after this transaction.
    #[serde(default)]
    pub gtid_field: GtidField,
}

impl BinlogTransaction {
    /// DML statements in binlog order.
    pub fn dml_statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter().filter(|s| s.is_dml())
    }

    /// Parse a transaction from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
