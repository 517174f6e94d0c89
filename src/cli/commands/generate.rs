//! Table regeneration command handlers.
//!
//! `generate` rewrites the host document in place; `check` performs the
//! same render in memory and reports whether the document is current.

use std::path::Path;

use crate::catalog::{Catalog, build_catalog};
use crate::cli::args::TargetArgs;
use crate::docgen;
use crate::document::{read_document, write_document};
use crate::error::PermsTableError;

/// Execute `generate`.
///
/// # Errors
///
/// Returns an error if the catalog is invalid, the document cannot be
/// read or written, or it lacks a marker.
pub fn generate(args: &TargetArgs) -> Result<(), PermsTableError> {
    let (current, updated) = render_for(&args.file)?;

    if current == updated {
        tracing::info!(path = %args.file.display(), "permissions table already up to date");
        return Ok(());
    }

    write_document(&args.file, &updated)?;
    tracing::info!(path = %args.file.display(), "regenerated permissions table");
    Ok(())
}

/// Execute `check`.
///
/// # Errors
///
/// Returns [`PermsTableError::StaleDocument`] if the document differs from
/// what `generate` would write, or any error `generate` can return before
/// writing.
pub fn check(args: &TargetArgs) -> Result<(), PermsTableError> {
    let (current, updated) = render_for(&args.file)?;

    if current != updated {
        return Err(PermsTableError::StaleDocument {
            path: args.file.clone(),
        });
    }

    tracing::info!(path = %args.file.display(), "permissions table is up to date");
    Ok(())
}

/// Returns the document's current contents and its regenerated form.
fn render_for(path: &Path) -> Result<(String, String), PermsTableError> {
    let catalog = validated_catalog()?;
    let current = read_document(path)?;
    let updated = docgen::regenerate(&catalog, &current)?;
    Ok((current, updated))
}

/// Builds the catalog and refuses to continue if it violates its invariants.
pub(crate) fn validated_catalog() -> Result<Catalog, PermsTableError> {
    let catalog = build_catalog();
    let issues = catalog.validate();
    if issues.is_empty() {
        return Ok(catalog);
    }

    for issue in &issues {
        tracing::error!(location = %issue.location, "{}", issue.message);
    }
    Err(PermsTableError::CatalogInvalid {
        count: issues.len(),
    })
}
