//! `streams-tools dealloc` — emit the deallocate_all subroutine.

use std::path::Path;

use anyhow::{Context, Result};

use streams_dealloc::{emit_deallocate_all, ResourceCatalog};

/// Emit the deallocation routine for the catalog (built-in inventory unless
/// a TOML override is given), to stdout or to a file.
pub fn run(catalog: Option<&str>, output: Option<&str>) -> Result<()> {
    let catalog = match catalog {
        Some(p) => ResourceCatalog::load(Path::new(p))
            .with_context(|| format!("loading catalog {p}"))?,
        None => ResourceCatalog::solver_default(),
    };

    catalog.validate().context("validating catalog")?;

    let code = emit_deallocate_all(&catalog);
    match output {
        Some(p) => {
            std::fs::write(p, format!("{code}\n"))
                .with_context(|| format!("writing {p}"))?;
            println!(
                "Wrote deallocate_all for {} arrays to {p}.",
                catalog.len()
            );
        }
        None => println!("{code}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("deallocate.f90");

        run(None, out.to_str()).unwrap();

        let code = std::fs::read_to_string(&out).unwrap();
        assert!(code.starts_with("subroutine deallocate_all()"));
        assert!(code.ends_with("end subroutine deallocate_all\n"));
        assert!(code.contains("#ifdef USE_CUDA"));
    }

    #[test]
    fn loads_a_catalog_override() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.toml");
        let out = dir.path().join("deallocate.f90");
        std::fs::write(
            &catalog,
            "always = [\"w\"]\ncuda = []\noptional = [\"pbc\"]\n",
        )
        .unwrap();

        run(catalog.to_str(), out.to_str()).unwrap();

        let code = std::fs::read_to_string(&out).unwrap();
        assert!(code.contains("deallocate(w)"));
        assert!(code.contains("if (allocated(pbc)) deallocate(pbc)"));
    }

    #[test]
    fn duplicate_catalog_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.toml");
        std::fs::write(&catalog, "always = [\"w\"]\ncuda = [\"w\"]\n").unwrap();

        let err = run(catalog.to_str(), None).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate catalog entry"));
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let err = run(Some("/nonexistent/catalog.toml"), None).unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
    }
}
