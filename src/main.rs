//! `permstable` - regenerates the permissions resource table

use clap::Parser;

use permstable::cli::args::Cli;
use permstable::cli::commands;
use permstable::error::ExitCode;
use permstable::observability::{LogSettings, init_logging};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::USAGE_ERROR
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(&LogSettings::from(&cli));

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            // Failures go to stdout, matching the tool this replaces.
            println!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
