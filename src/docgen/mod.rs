//! Permissions table generation.
//!
//! Renders the catalog to markdown and splices it into the host document
//! between its `BEGIN TABLE` and `END TABLE` marker lines.

pub mod error;
pub mod escape;
pub mod splice;
pub mod table;

pub use error::SpliceError;
pub use splice::splice_document;
pub use table::RenderedTable;

use crate::catalog::Catalog;

/// Render `catalog` and splice it into `document`.
///
/// # Errors
///
/// Returns [`SpliceError::MissingMarker`] if the document lacks a marker.
pub fn regenerate(catalog: &Catalog, document: &str) -> Result<String, SpliceError> {
    let table = RenderedTable::from_catalog(catalog);
    tracing::debug!(
        resources = catalog.resources.len(),
        toc_lines = table.toc.len(),
        body_lines = table.body.len(),
        "rendered permissions table"
    );
    splice_document(document, &table)
}
