//! sqlannotation - CLI entrypoint.
//!
//! Usage:
//!   sqlannotation annotate "UPDATE t SET a=1 WHERE id=7" -k 166b40b44aba4bd6
//!   sqlannotation extract "UPDATE t SET a=1 /* vtgate:: keyspace_id:166b40b44aba4bd6 */"
//!   sqlannotation classify < statements.sql
//!   sqlannotation inspect transaction.json
//!   sqlannotation config validate sqlannotation.toml

use anyhow::Result;
use clap::Parser;
use sqlannotation::cli::commands::{
    run_annotate, run_classify, run_config, run_extract, run_inspect,
};
use sqlannotation::cli::{Cli, Commands};
use sqlannotation::core::config::{Config, ConfigOverrides};
use sqlannotation::ops::telemetry::init_tracing;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref().map(Path::new))?;
    config.apply_overrides(&ConfigOverrides {
        log_level: cli.log_level,
        ..ConfigOverrides::default()
    });
    config.validate()?;
    init_tracing(&config.telemetry)?;

    match cli.command {
        Commands::Annotate(args) => run_annotate(args, &config),
        Commands::Extract(args) => run_extract(args),
        Commands::Classify(args) => run_classify(args),
        Commands::Inspect(args) => run_inspect(args),
        Commands::Config(args) => run_config(args),
    }
}
