//! Whole-file annotation pass over an f2py signature file.
//!
//! The pass is purely additive: every input line is copied to the output
//! unchanged and in order, and each qualifying `wrap_*` declaration inside
//! the interface block is followed by a freshly inserted pair of `!f2py`
//! binding directives. The file is read in full, transformed in full, and
//! rewritten in full.

use std::path::Path;

use serde::Serialize;

use crate::classify::{classify_line, LineClass, WRAP_PREFIX};
use crate::error::{PyfError, Result};

/// Indentation of injected directive lines, matching the generated file's
/// interface-block convention.
const DIRECTIVE_INDENT: &str = "        ";

/// What an annotation pass did.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationSummary {
    /// Line count of the input.
    pub input_lines: usize,
    /// Line count of the output (input plus two per annotated subroutine).
    pub output_lines: usize,
    /// Names of the subroutines that received a directive pair, in file
    /// order.
    pub annotated: Vec<String>,
}

/// The two binding directives for a wrapped subroutine: the
/// trailing-underscore Fortran symbol and the unmangled name.
fn directive_pair(name: &str) -> [String; 2] {
    [
        format!("{DIRECTIVE_INDENT}!f2py symbol: {name}_\n"),
        format!("{DIRECTIVE_INDENT}!f2py name: {name}\n"),
    ]
}

/// Annotate signature-file content, returning the rewritten content and a
/// summary of the pass.
///
/// Original lines keep their exact bytes, line terminators included. A
/// declaration on a final unterminated line gains a terminator before its
/// directives so the inserted lines stay on lines of their own.
pub fn annotate(content: &str) -> (String, AnnotationSummary) {
    let mut in_interface = false;
    let mut out = String::with_capacity(content.len() + 256);
    let mut annotated = Vec::new();
    let mut input_lines = 0;
    let mut output_lines = 0;

    for raw in content.split_inclusive('\n') {
        input_lines += 1;
        out.push_str(raw);
        output_lines += 1;

        let (class, next_context) = classify_line(raw, in_interface);
        if let LineClass::SubroutineDecl { name } = &class {
            if name.starts_with(WRAP_PREFIX) {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                for directive in directive_pair(name) {
                    out.push_str(&directive);
                }
                output_lines += 2;
                annotated.push(name.clone());
            }
        }
        in_interface = next_context;
    }

    let summary = AnnotationSummary {
        input_lines,
        output_lines,
        annotated,
    };
    (out, summary)
}

/// Annotate a signature file in place.
///
/// Reads the whole file, computes the whole output, and rewrites the file,
/// so the caller never observes a partially annotated state.
pub fn annotate_file(path: &Path) -> Result<AnnotationSummary> {
    if !path.exists() {
        return Err(PyfError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let (output, summary) = annotate(&content);
    std::fs::write(path, output)?;
    Ok(summary)
}
