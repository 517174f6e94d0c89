//! Error types for table generation.

use thiserror::Error;

/// Marker that opens the generated region of the host document.
pub const BEGIN_MARKER: &str = "BEGIN TABLE";

/// Marker that closes the generated region of the host document.
pub const END_MARKER: &str = "END TABLE";

/// Errors that can occur while splicing the table into a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    /// A required marker line was not found.
    #[error("marker \"{marker}\" not found in document")]
    MissingMarker {
        /// The marker text that was searched for.
        marker: &'static str,
    },
}
