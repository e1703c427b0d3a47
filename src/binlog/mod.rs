//! Binlog statement model.
//!
//! Filtered replication reads transactions from the binlog and routes each
//! annotated DML statement by its keyspace id.

pub mod transaction;

pub use transaction::{
    BinlogTransaction, GtidField, Statement, StatementCategory, UnknownCategory,
};
