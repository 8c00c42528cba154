//! # Check Subcommand
//!
//! Match one recorded document against a schema definition file.
//!
//! ```bash
//! matcha check --schema weather.yaml weather.json
//! matcha check --schema event.yaml --format xml --capture body.txt
//! ```
//!
//! A mismatch prints the full report to stdout. With `--capture` the
//! captured values are printed afterwards as a JSON object, whether or not
//! the document matched.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use matcha::{load_schema, Captures, DocumentFormat, Expectation, Verdict};

use crate::resolve_format;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema definition file (YAML or JSON).
    #[arg(long)]
    pub schema: PathBuf,

    /// Document format. Defaults to the document's file extension.
    #[arg(long)]
    pub format: Option<DocumentFormat>,

    /// Print captured values as JSON.
    #[arg(long)]
    pub capture: bool,

    /// Document to check.
    pub document: PathBuf,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let schema = load_schema(&args.schema)
        .with_context(|| format!("failed to load schema: {}", args.schema.display()))?;
    let format = resolve_format(&args.document, args.format)?;
    let body = std::fs::read(&args.document)
        .with_context(|| format!("failed to read document: {}", args.document.display()))?;

    let mut captures = Captures::new();
    let outcome = Expectation::new(&schema)
        .capture_into(&mut captures)
        .check(format, &body);

    let code = match outcome {
        Ok(Verdict::Pass) => {
            tracing::info!(document = %args.document.display(), "document matches schema");
            0
        }
        Ok(Verdict::Fail(report)) => {
            tracing::info!(
                document = %args.document.display(),
                discrepancies = report.discrepancies().len(),
                "document does not match schema"
            );
            println!("{report}");
            1
        }
        Err(err) => {
            tracing::debug!(error = ?err, "document could not be decoded");
            println!("{err}");
            1
        }
    };

    if args.capture {
        let rendered =
            serde_json::to_string_pretty(&captures).context("failed to render captured values")?;
        println!("{rendered}");
    }

    Ok(code)
}
