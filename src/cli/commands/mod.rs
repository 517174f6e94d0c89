//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod catalog;
pub mod completions;
pub mod generate;
pub mod print;
pub mod version;

use crate::cli::args::{Cli, Commands, TargetArgs};
use crate::error::PermsTableError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// A bare invocation behaves like `generate` with no flags.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), PermsTableError> {
    match cli.command {
        None => generate::generate(&TargetArgs::from_env()?),
        Some(Commands::Generate(args)) => generate::generate(&args),
        Some(Commands::Check(args)) => generate::check(&args),
        Some(Commands::Print(args)) => print::run(&args),
        Some(Commands::Catalog(args)) => catalog::run(&args),
        Some(Commands::Completions(args)) => {
            completions::run(&args, &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Version(args)) => version::run(&args),
    }
}
