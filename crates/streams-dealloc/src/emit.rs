//! Fortran emission for the solver's deallocation routine.

use crate::catalog::ResourceCatalog;

/// Render the `deallocate_all` subroutine for the given catalog.
///
/// The output is a deterministic function of the catalog and its list
/// order: unconditional releases first, then the `USE_CUDA` preprocessor
/// region, then the `allocated()`-guarded releases. No deduplication is
/// performed; see [`ResourceCatalog::validate`].
pub fn emit_deallocate_all(catalog: &ResourceCatalog) -> String {
    let mut lines = Vec::new();

    // The header keeps the exact shape of the generated source checked in
    // next to the solver, trailing space included.
    lines.push("subroutine deallocate_all() ".to_string());
    lines.push("use mod_streams".to_string());
    lines.push(String::new());

    for name in &catalog.always {
        lines.push(release(name));
    }

    lines.push("#ifdef USE_CUDA".to_string());
    for name in &catalog.cuda {
        lines.push(release(name));
    }
    lines.push("#endif".to_string());

    for name in &catalog.optional {
        lines.push(release_if_allocated(name));
    }

    lines.push("end subroutine deallocate_all".to_string());
    lines.join("\n")
}

/// An unconditional release statement.
fn release(name: &str) -> String {
    format!("deallocate({name})")
}

/// A release statement guarded by an allocation check.
fn release_if_allocated(name: &str) -> String {
    format!("if (allocated({name})) deallocate({name})")
}
