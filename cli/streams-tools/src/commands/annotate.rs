//! `streams-tools annotate` — inject f2py binding directives into the
//! signature file.

use std::path::Path;

use anyhow::{bail, Context, Result};

use streams_pyf::{annotate_file, DEFAULT_SIGNATURE_FILE};

/// Annotate the signature file in place and report what was done.
pub fn run(input: Option<&str>, report: Option<&str>) -> Result<()> {
    let path = Path::new(input.unwrap_or(DEFAULT_SIGNATURE_FILE));

    let summary =
        annotate_file(path).with_context(|| format!("annotating {}", path.display()))?;

    match report.unwrap_or("human") {
        "human" => {
            println!(
                "Patched {} with f2py symbol bindings ({} subroutines, {} -> {} lines).",
                path.display(),
                summary.annotated.len(),
                summary.input_lines,
                summary.output_lines
            );
        }
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        other => bail!("unknown report format: {other} (expected human or json)"),
    }

    Ok(())
}
