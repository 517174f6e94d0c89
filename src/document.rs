//! Reading and writing the host document.
//!
//! Writes go through a temporary file in the target's directory that is
//! renamed over the target, so a failed write leaves the original intact.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::PermsTableError;

/// Permission bits of the written document.
#[cfg(unix)]
pub const DOCUMENT_MODE: u32 = 0o644;

/// Read the host document at `path`.
///
/// # Errors
///
/// Returns [`PermsTableError::FileRead`] if the file cannot be read, or
/// [`PermsTableError::InvalidEncoding`] if it is not UTF-8.
pub fn read_document(path: &Path) -> Result<String, PermsTableError> {
    let bytes = fs::read(path).map_err(|source| PermsTableError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| PermsTableError::InvalidEncoding {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Replace the document at `path` with `contents`.
///
/// # Errors
///
/// Returns [`PermsTableError::FileWrite`] if the temporary file cannot be
/// created, written or renamed over `path`.
pub fn write_document(path: &Path, contents: &str) -> Result<(), PermsTableError> {
    let write_err = |source| PermsTableError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    set_mode(tmp.as_file()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote document");
    Ok(())
}

#[cfg(unix)]
fn set_mode(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(DOCUMENT_MODE))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn set_mode(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
