//! f2py signature-file annotation for the flow solver's Python binding.
//!
//! The solver's Fortran core is wrapped for Python with f2py, which works
//! from a generated `.pyf` signature file. f2py alone does not resolve the
//! trailing-underscore Fortran symbols of the `wrap_*` entry points, so the
//! build patches the signature file after generation: every wrapped
//! subroutine declared inside the interface block gets a pair of `!f2py`
//! binding directives inserted directly after its declaration.
//!
//! ## Modules
//!
//! - [`classify`] — per-line classification of signature-file content
//! - [`annotate`] — the whole-file annotation pass
//! - [`error`] — error types

pub mod annotate;
pub mod classify;
pub mod error;

pub use annotate::{annotate, annotate_file, AnnotationSummary};
pub use classify::{classify_line, LineClass};
pub use error::PyfError;

/// Signature file patched by the binding build, relative to the invocation
/// directory.
pub const DEFAULT_SIGNATURE_FILE: &str = "libstreams.pyf";
