//! CLI argument definitions
//!
//! All Clap derive structs for `permstable` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Command, FromArgMatches, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

/// Host document the table is spliced into, relative to the repository root.
pub const DEFAULT_TABLE_FILE: &str =
    "website/content/docs/concepts/security/permissions/resource-table.mdx";

// ============================================================================
// Root CLI
// ============================================================================

/// Generates the permissions resource table for the documentation website.
///
/// Without a subcommand, regenerates the table in the default document.
#[derive(Parser, Debug)]
#[command(name = "permstable", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to `generate`).
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "PERMSTABLE_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the table inside the host document.
    Generate(TargetArgs),

    /// Fail if the host document's table is out of date.
    Check(TargetArgs),

    /// Print the rendered table to stdout.
    Print(PrintArgs),

    /// Dump the permission catalog.
    Catalog(CatalogArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Table Commands
// ============================================================================

/// Arguments for `generate` and `check`.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Host document containing the table markers.
    #[arg(short, long, default_value = DEFAULT_TABLE_FILE, env = "PERMSTABLE_FILE")]
    pub file: PathBuf,
}

impl TargetArgs {
    /// Resolves the target for a bare invocation.
    ///
    /// Goes through the same clap definition as `generate`, so
    /// `PERMSTABLE_FILE` and the default path apply identically.
    ///
    /// # Errors
    ///
    /// Returns a clap error if the environment value cannot be parsed.
    pub fn from_env() -> Result<Self, clap::Error> {
        let matches =
            Self::augment_args(Command::new("permstable")).try_get_matches_from(["permstable"])?;
        Self::from_arg_matches(&matches)
    }
}

/// Arguments for `print`.
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Which part of the table to print.
    #[arg(short, long, default_value = "all")]
    pub section: Section,
}

/// Arguments for `catalog`.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for informational commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// JSON.
    Json,
}

/// Part of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Section {
    /// Table of contents only.
    Toc,
    /// Resource sections only.
    Body,
    /// Table of contents followed by resource sections.
    #[default]
    All,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash
    Bash,
    /// Zsh
    Zsh,
    /// Fish
    Fish,
    /// `PowerShell`
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish
    Elvish,
}
