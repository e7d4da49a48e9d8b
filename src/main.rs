//! Langcheck: language and locale policy checker.
//!
//! This is the main entry point for the `langcheck` CLI. It parses
//! arguments, runs the check, prints the report and maps the outcome to an
//! exit code.

use langcheck::check::{self, CheckOutcome};
use langcheck::cli::Cli;
use langcheck::exit_codes;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {}", e);
            return ExitCode::from(exit_codes::RESOLUTION_FAILURE as u8);
        }
    };

    match check::run(&cli.check_options(&cwd)) {
        Ok(CheckOutcome::NothingToCheck) => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(CheckOutcome::Checked(reporter)) => {
            print!("{}", reporter.render(cli.format));
            ExitCode::from(reporter.exit_code() as u8)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("langcheck=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
