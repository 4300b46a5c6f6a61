//! `sitegen` — Static-asset generator for the Affirm integration testing suite

use clap::Parser;

use sitegen::cli::args::Cli;
use sitegen::cli::commands;
use sitegen::error::ExitCode;
use sitegen::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
