//! Error types for `permstable`
//!
//! Top-level error hierarchy and the exit codes the CLI maps it to.

use std::path::PathBuf;
use thiserror::Error;

use crate::docgen::SpliceError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `permstable` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Catalog failed validation, or the document is out of date
    pub const CONTENT_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Host document is missing a marker line
    pub const MARKER_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `permstable` operations.
#[derive(Debug, Error)]
pub enum PermsTableError {
    /// The host document could not be read.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        /// Path of the host document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The host document is not UTF-8.
    #[error("{} is not valid UTF-8 (first invalid byte at offset {offset})", path.display())]
    InvalidEncoding {
        /// Path of the host document
        path: PathBuf,
        /// Byte offset of the first invalid sequence
        offset: usize,
    },

    /// The updated document could not be written.
    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        /// Path of the host document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The host document could not be spliced.
    #[error(transparent)]
    Splice(#[from] SpliceError),

    /// The built-in catalog violates its invariants.
    #[error("catalog has {count} validation issue(s)")]
    CatalogInvalid {
        /// Number of issues found
        count: usize,
    },

    /// `check` found the document differs from the generated output.
    #[error("{} is out of date; run `permstable generate`", path.display())]
    StaleDocument {
        /// Path of the host document
        path: PathBuf,
    },

    /// Arguments could not be resolved outside of normal parsing.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// I/O error outside of the host document, e.g. writing to stdout
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PermsTableError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::FileRead { .. }
            | Self::InvalidEncoding { .. }
            | Self::FileWrite { .. }
            | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Splice(_) => ExitCode::MARKER_ERROR,
            Self::CatalogInvalid { .. } | Self::StaleDocument { .. } => ExitCode::CONTENT_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}
