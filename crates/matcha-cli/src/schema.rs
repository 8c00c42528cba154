//! # Schema Subcommand
//!
//! Print the descriptor tree a definition file loads as, to confirm how
//! field names, key overrides and directives were read.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use matcha::load_schema;

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Schema definition file (YAML or JSON).
    #[arg(long)]
    pub schema: PathBuf,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    let schema = load_schema(&args.schema)
        .with_context(|| format!("failed to load schema: {}", args.schema.display()))?;
    println!("{schema}");
    Ok(0)
}
