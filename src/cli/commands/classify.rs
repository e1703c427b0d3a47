//! Classify command implementation.

use super::stdin_statements;
use crate::annotation::dml_kind;
use anyhow::Result;
use clap::Args;
use std::io::Write;

/// Report whether statements are DML.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Statement to classify. Reads one statement per line from stdin if omitted.
    pub sql: Option<String>,
}

/// Run the classify command.
pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    let statements = stdin_statements(args.sql)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for sql in &statements {
        writeln!(out, "{}", classify(sql))?;
    }
    Ok(())
}

fn classify(sql: &str) -> String {
    match dml_kind(sql) {
        Some(kind) => format!("dml ({})", kind),
        None => "non-dml".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_output() {
        assert_eq!(classify("  insert into t values (1)"), "dml (INSERT)");
        assert_eq!(classify("SELECT 1"), "non-dml");
        assert_eq!(classify("delete"), "non-dml");
    }
}
