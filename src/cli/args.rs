//! CLI argument definitions
//!
//! All Clap derive structs for `sitegen` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::catalog::ScenarioCategory;

// ============================================================================
// Root CLI
// ============================================================================

/// Static-asset generator for the Affirm integration testing suite.
///
/// Invoked with no arguments, runs the full generation pipeline in the
/// current directory.
#[derive(Parser, Debug)]
#[command(name = "sitegen", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute; defaults to `generate`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "SITEGEN_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check site structure and write both JSON asset files.
    Generate(GenerateArgs),

    /// Check that the required static assets exist, without writing anything.
    Validate(ValidateArgs),

    /// Inspect the built-in test scenario catalog.
    Scenarios(ScenariosCommand),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `generate` (also the default invocation).
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory holding the site assets and receiving the JSON files.
    #[arg(long, default_value = ".", env = "SITEGEN_SITE_DIR")]
    pub site_dir: PathBuf,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from("."),
        }
    }
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory holding the site assets.
    #[arg(long, default_value = ".", env = "SITEGEN_SITE_DIR")]
    pub site_dir: PathBuf,

    /// Treat missing assets as an error (non-zero exit).
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Scenarios Command
// ============================================================================

/// Scenario catalog commands.
#[derive(Args, Debug)]
pub struct ScenariosCommand {
    /// Scenarios subcommand.
    #[command(subcommand)]
    pub subcommand: ScenariosSubcommand,
}

/// Scenarios subcommands.
#[derive(Subcommand, Debug)]
pub enum ScenariosSubcommand {
    /// List built-in scenarios, grouped by category.
    List(ScenariosListArgs),

    /// Display a single scenario record as JSON.
    Show(ScenariosShowArgs),
}

/// Arguments for `scenarios list`.
#[derive(Args, Debug)]
pub struct ScenariosListArgs {
    /// Only list scenarios in this category.
    #[arg(long)]
    pub category: Option<ScenarioCategory>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `scenarios show`.
#[derive(Args, Debug)]
pub struct ScenariosShowArgs {
    /// Exact scenario name, e.g. "Checkout Initialization".
    pub name: String,
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

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
