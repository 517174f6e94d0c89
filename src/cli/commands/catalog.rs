//! Catalog dump command.

use crate::catalog::Catalog;
use crate::cli::args::{CatalogArgs, OutputFormat};
use crate::cli::commands::generate::validated_catalog;
use crate::error::PermsTableError;

/// Execute `catalog`.
///
/// # Errors
///
/// Returns an error if the catalog is invalid or JSON serialization fails.
pub fn run(args: &CatalogArgs) -> Result<(), PermsTableError> {
    let catalog = validated_catalog()?;
    match args.format {
        OutputFormat::Human => print!("{}", summarize(&catalog)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
    }
    Ok(())
}

/// One block per resource: type and scopes, then each endpoint's actions.
fn summarize(catalog: &Catalog) -> String {
    let mut out = String::new();
    for resource in &catalog.resources {
        out.push_str(&format!(
            "{} [{}]\n",
            resource.type_name,
            resource.scopes.join(", ")
        ));
        for endpoint in &resource.endpoints {
            let actions: Vec<&str> = endpoint.actions.iter().map(|a| a.name.as_str()).collect();
            out.push_str(&format!("  {:<28} {}\n", endpoint.path, actions.join(", ")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;

    #[test]
    fn summary_lists_endpoints() {
        let summary = summarize(&build_catalog());
        assert!(summary.starts_with("Account [Global, Org]\n"));
        assert!(summary.contains("  /accounts                    create, list\n"));
        assert!(summary.contains("Worker [Global]\n"));
    }
}
