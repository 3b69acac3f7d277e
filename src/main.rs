//! `ddb-flatten` - flatten a typed attribute JSON file and print plain JSON
//!
//! Usage:
//!   `ddb-flatten --config item.json`
//!   `ddb-flatten -c item.json --pretty --strict-tags`

use anyhow::Context;
use clap::Parser;
use ddb_flatten::{FlattenOptions, TagConflict};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ddb-flatten")]
#[command(
    author,
    version,
    about = "Flatten DynamoDB-style typed attribute JSON into plain JSON"
)]
struct Cli {
    /// Typed JSON document to read
    #[arg(
        short,
        long,
        env = "DDB_FLATTEN_CONFIG",
        default_value = "schema.json"
    )]
    config: PathBuf,

    /// Indent the output
    #[arg(long)]
    pretty: bool,

    /// Fail on fields carrying more than one type tag
    #[arg(long)]
    strict_tags: bool,
}

impl Cli {
    fn options(&self) -> FlattenOptions {
        let tag_conflict = if self.strict_tags {
            TagConflict::Reject
        } else {
            TagConflict::LastWins
        };
        FlattenOptions::new()
            .with_pretty(self.pretty)
            .with_tag_conflict(tag_conflict)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options();

    let doc = ddb_flatten::from_path_with_options(&cli.config, &options)
        .with_context(|| format!("failed to flatten {}", cli.config.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ddb_flatten::to_writer(&mut out, &doc, &options)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
