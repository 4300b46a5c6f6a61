//! Structure validation command.
//!
//! Runs the structure check on its own. By default the result is purely
//! informational, matching the generation pipeline; `--strict` promotes
//! missing assets to an error.

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::{Result, SiteGenError};
use crate::structure;

/// Execute `validate`.
///
/// # Errors
///
/// With `--strict`, returns an I/O error when any required asset is
/// missing; otherwise missing assets only affect the report.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let report = structure::check(&args.site_dir);

    match args.format {
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&serde_json::json!({
                "required": structure::REQUIRED_FILES,
                "missing": report.missing,
                "complete": report.is_complete(),
            }))?;
            println!("{rendered}");
        }
        OutputFormat::Human => {
            if report.is_complete() {
                println!("✓ All required files present");
            } else {
                println!("⚠ Missing files: {}", report.missing_joined());
            }
        }
    }

    if args.strict && !report.is_complete() {
        return Err(SiteGenError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("missing required files: {}", report.missing_joined()),
        )));
    }

    Ok(())
}
