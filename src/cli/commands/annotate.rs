//! Annotate command implementation.

use super::stdin_statements;
use crate::annotation::{add_keyspace_id, is_dml, Annotator};
use crate::core::config::Config;
use crate::ops::observability::MetricsRegistry;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::io::Write;
use std::sync::Arc;

/// Annotate statements with a keyspace id.
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Statement to annotate. Reads one statement per line from stdin if omitted.
    pub sql: Option<String>,

    /// Keyspace id in hex. Repeat for statements touching several keyspace ids.
    #[arg(short = 'k', long = "keyspace-id")]
    pub keyspace_ids: Vec<String>,

    /// Comments appended verbatim after the keyspace id annotation. Requires
    /// exactly one keyspace id; non-DML statements are left unchanged.
    #[arg(long)]
    pub trailing_comments: Option<String>,

    /// Print counters as JSON after annotating.
    #[arg(long)]
    pub stats: bool,
}

/// Run the annotate command.
pub fn run_annotate(args: AnnotateArgs, config: &Config) -> Result<()> {
    let keyspace_ids = decode_keyspace_ids(&args.keyspace_ids)?;
    let statements = stdin_statements(args.sql)?;

    let registry = Arc::new(MetricsRegistry::new());
    let annotator = Annotator::from_config(&config.annotation, registry.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    annotate_statements(
        &annotator,
        &statements,
        &keyspace_ids,
        args.trailing_comments.as_deref(),
        &mut out,
    )?;
    if args.stats {
        writeln!(out, "{}", registry.export_json())?;
    }
    Ok(())
}

fn decode_keyspace_ids(hex_ids: &[String]) -> Result<Vec<Vec<u8>>> {
    hex_ids
        .iter()
        .map(|id| hex::decode(id).with_context(|| format!("invalid keyspace id: {}", id)))
        .collect()
}

fn annotate_statements<W: Write>(
    annotator: &Annotator,
    statements: &[String],
    keyspace_ids: &[Vec<u8>],
    trailing_comments: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let trailing = match (trailing_comments, keyspace_ids) {
        (None, _) => None,
        (Some(trailing), [keyspace_id]) => Some((trailing, keyspace_id)),
        (Some(_), ids) => bail!(
            "--trailing-comments needs exactly one keyspace id, got {}",
            ids.len()
        ),
    };

    for sql in statements {
        let annotated = match trailing {
            Some((trailing, keyspace_id)) if is_dml(sql) => {
                add_keyspace_id(sql, keyspace_id, trailing)
            }
            Some(_) => {
                tracing::debug!(statement = %sql, "not DML, trailing comments not appended");
                sql.clone()
            }
            None => annotator.annotate_if_dml(sql, keyspace_ids),
        };
        writeln!(out, "{}", annotated)?;
    }
    Ok(())
}
