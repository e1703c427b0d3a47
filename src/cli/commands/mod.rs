//! CLI command implementations.

mod annotate;
mod classify;
mod config;
mod extract;
mod inspect;

pub use annotate::{run_annotate, AnnotateArgs};
pub use classify::{run_classify, ClassifyArgs};
pub use config::{run_config, ConfigArgs, ConfigCommand};
pub use extract::{run_extract, ExtractArgs};
pub use inspect::{run_inspect, InspectArgs};

use anyhow::{Context, Result};
use std::io::BufRead;

/// Statements to process: the argument if given, otherwise one per
/// non-blank line of `input`.
fn read_statements<R: BufRead>(sql: Option<String>, input: R) -> Result<Vec<String>> {
    if let Some(sql) = sql {
        return Ok(vec![sql]);
    }
    let mut statements = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read statements from stdin")?;
        if !line.trim().is_empty() {
            statements.push(line);
        }
    }
    Ok(statements)
}

fn stdin_statements(sql: Option<String>) -> Result<Vec<String>> {
    read_statements(sql, std::io::stdin().lock())
}
