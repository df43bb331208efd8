//! Output formatting: JSON, compact JSON, YAML.
//!
//! List and info actions render through here; create actions print the
//! `<status>: <body>` line directly.

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render any serializable value in the chosen format.
pub fn render<T: serde::Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(data)?),
        OutputFormat::Yaml => {
            serde_yaml::to_string(data).map_err(|e| CliError::Render(e.to_string()))
        }
    }
}

/// Print rendered output to stdout.
pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
