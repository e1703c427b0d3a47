//! Command-line interface.

pub mod commands;

use clap::{Parser, Subcommand};

/// sqlannotation - keyspace id annotations for filtered replication.
#[derive(Parser, Debug)]
#[command(name = "sqlannotation")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Annotate statements with a keyspace id.
    Annotate(commands::AnnotateArgs),
    /// Extract the keyspace id from annotated statements.
    Extract(commands::ExtractArgs),
    /// Report whether statements are DML.
    Classify(commands::ClassifyArgs),
    /// Inspect a binlog transaction dumped as JSON.
    Inspect(commands::InspectArgs),
    /// Configuration operations.
    Config(commands::ConfigArgs),
}
