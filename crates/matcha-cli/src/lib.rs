//! # matcha-cli — Command Line for matcha
//!
//! Checks a recorded response against a schema definition without writing
//! any Rust, for CI jobs and for poking at a failing fixture by hand.
//!
//! ## Subcommands
//!
//! - `matcha check` — match a JSON or XML document against a schema file.
//! - `matcha schema` — print the descriptor tree a schema file loads as.
//!
//! ```bash
//! matcha check --schema schemas/weather.yaml responses/weather.json
//! matcha check --schema event.yaml --format xml --capture body.txt
//! matcha -vv schema --schema schemas/weather.yaml
//! ```
//!
//! Every handler returns the process exit code: `0` when the document
//! matches, `1` when it does not or cannot be read.

pub mod check;
pub mod schema;

use std::path::Path;

use anyhow::{bail, Result};
use matcha::DocumentFormat;

/// Pick the document format: the explicit choice if given, otherwise the
/// file extension.
pub fn resolve_format(path: &Path, explicit: Option<DocumentFormat>) -> Result<DocumentFormat> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match DocumentFormat::from_extension(ext) {
        Some(format) => Ok(format),
        None => bail!(
            "cannot tell the format of {} from its extension; pass --format json|xml",
            path.display()
        ),
    }
}
