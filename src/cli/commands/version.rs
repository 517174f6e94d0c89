//! Version information display

use crate::catalog::build_catalog;
use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::PermsTableError;

/// Print the package version and the size of the built-in catalog.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), PermsTableError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let resources = build_catalog().resources.len();

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version} ({resources} resource types)");
        }
        OutputFormat::Json => {
            let info = serde_json::json!({
                "name": name,
                "version": version,
                "resources": resources,
            });
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
