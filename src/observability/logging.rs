//! Logging initialization for `permstable`.
//!
//! A successful run must print nothing, and `print` / `catalog` own stdout,
//! so every subscriber here writes to stderr and the default level is
//! `warn`. `PERMSTABLE_LOG_LEVEL` overrides the verbosity flags.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice};

/// Environment variable that overrides the verbosity flags.
pub const LOG_LEVEL_ENV: &str = "PERMSTABLE_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Logging options taken from the global CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSettings {
    /// Output format.
    pub format: LogFormat,
    /// Count of `-v` flags.
    pub verbosity: u8,
    /// Color control for the human format.
    pub color: ColorChoice,
    /// `--quiet`: install no subscriber at all.
    pub quiet: bool,
}

impl From<&Cli> for LogSettings {
    fn from(cli: &Cli) -> Self {
        Self {
            format: cli.log_format,
            verbosity: cli.verbose,
            color: cli.color,
            quiet: cli.quiet,
        }
    }
}

impl LogSettings {
    /// Targets are only useful once debug output is on.
    const fn show_target(&self) -> bool {
        self.verbosity >= 2
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(self.verbosity)))
    }
}

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Whether ANSI colors should be used on stderr.
#[must_use]
pub const fn ansi_enabled(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Installs the global stderr subscriber unless `settings.quiet` is set.
///
/// Uses `try_init()`, so repeated calls (e.g. from tests) are ignored.
pub fn init_logging(settings: &LogSettings) {
    if settings.quiet {
        return;
    }

    let filter = settings.filter();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(settings.show_target())
        .with_writer(std::io::stderr);

    let _ = match settings.format {
        LogFormat::Human => {
            let ansi = ansi_enabled(
                settings.color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            builder.with_ansi(ansi).try_init()
        }
        LogFormat::Json => builder.json().try_init(),
    };
}
