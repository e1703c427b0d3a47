//! Inspect command implementation.

use crate::binlog::BinlogTransaction;
use crate::core::error::AnnotationError;
use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Inspect binlog transactions dumped as JSON.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// JSON files, each holding one transaction.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Run the inspect command.
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in args.paths {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let txn = BinlogTransaction::from_json(&content)
            .with_context(|| format!("failed to parse transaction in {}", path.display()))?;
        writeln!(out, "{}:", path.display())?;
        describe(&txn, &mut out)?;
    }
    Ok(())
}

fn describe<W: Write>(txn: &BinlogTransaction, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "  gtid={} timestamp={} statements={}",
        txn.gtid_field,
        txn.timestamp,
        txn.statements.len()
    )?;
    for (index, stmt) in txn.statements.iter().enumerate() {
        let routing = if stmt.is_dml() {
            match stmt.keyspace_id() {
                Ok(keyspace_id) => format!("keyspace_id={}", hex::encode(keyspace_id)),
                Err(AnnotationError::ReplicationUnfriendly { .. }) => "unfriendly".to_string(),
                Err(err) => format!("error: {}", err),
            }
        } else {
            "-".to_string()
        };
        writeln!(out, "  [{}] {} {}", index, stmt.category, routing)?;
    }
    Ok(())
}
