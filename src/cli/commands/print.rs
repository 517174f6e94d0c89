//! Prints the rendered table without touching any file.

use std::io::Write;

use crate::cli::args::{PrintArgs, Section};
use crate::cli::commands::generate::validated_catalog;
use crate::docgen::RenderedTable;
use crate::error::PermsTableError;

/// Execute `print`.
///
/// # Errors
///
/// Returns an error if the catalog is invalid or stdout cannot be written.
pub fn run(args: &PrintArgs) -> Result<(), PermsTableError> {
    let table = RenderedTable::from_catalog(&validated_catalog()?);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(section_text(&table, args.section).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Text for the requested section, newline-terminated.
fn section_text(table: &RenderedTable, section: Section) -> String {
    let text = match section {
        Section::Toc => table.toc.join("\n"),
        Section::Body => table.body.join("\n"),
        Section::All => format!("{}\n\n{}", table.toc.join("\n"), table.body.join("\n")),
    };
    format!("{text}\n")
}
