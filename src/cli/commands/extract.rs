//! Extract command implementation.

use super::stdin_statements;
use crate::annotation::extract_keyspace_id;
use crate::core::error::AnnotationError;
use anyhow::Result;
use clap::Args;
use std::io::Write;

/// Extract the keyspace id from annotated statements.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Annotated statement. Reads one statement per line from stdin if omitted.
    pub sql: Option<String>,
}

/// Run the extract command.
///
/// Prints the keyspace id in hex, or `unfriendly`, per statement. Fails if
/// any statement has a missing or malformed annotation.
pub fn run_extract(args: ExtractArgs) -> Result<()> {
    let statements = stdin_statements(args.sql)?;
    let stdout = std::io::stdout();
    let failures = extract_statements(&statements, &mut stdout.lock())?;
    if failures > 0 {
        anyhow::bail!("{} of {} statements failed to parse", failures, statements.len());
    }
    Ok(())
}

/// Returns the number of parse failures.
fn extract_statements<W: Write>(statements: &[String], out: &mut W) -> Result<usize> {
    let mut failures = 0;
    for sql in statements {
        match extract_keyspace_id(sql) {
            Ok(keyspace_id) => writeln!(out, "{}", hex::encode(keyspace_id))?,
            Err(AnnotationError::ReplicationUnfriendly { .. }) => writeln!(out, "unfriendly")?,
            Err(err @ AnnotationError::Parse { .. }) => {
                failures += 1;
                tracing::debug!(error = %err, "failed to extract keyspace id");
                writeln!(out, "error: {}", err)?;
            }
        }
    }
    Ok(failures)
}
