//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler. A bare
//! invocation with no subcommand runs the full generation pipeline.

pub mod completions;
pub mod generate;
pub mod scenarios;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands, GenerateArgs, ScenariosSubcommand};
use crate::error::Result;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        None => generate::run(&GenerateArgs::default()),
        Some(Commands::Generate(args)) => generate::run(&args),
        Some(Commands::Validate(args)) => validate::run(&args),
        Some(Commands::Scenarios(cmd)) => match cmd.subcommand {
            ScenariosSubcommand::List(args) => scenarios::list(&args),
            ScenariosSubcommand::Show(args) => scenarios::show(&args),
        },
        Some(Commands::Completions(args)) => {
            completions::run(&args);
            Ok(())
        }
        Some(Commands::Version(args)) => {
            version::run(&args);
            Ok(())
        }
    }
}
