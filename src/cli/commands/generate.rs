//! Site generation driver.
//!
//! Runs the structure check and both emitters in a fixed order. The
//! structure check is informational: its outcome is printed but never gates
//! the emitters, so a run in an empty directory still writes both files and
//! exits 0.

use crate::catalog;
use crate::cli::args::GenerateArgs;
use crate::config;
use crate::error::Result;
use crate::structure;

/// Execute `generate`: check structure, write the configuration file, write
/// the scenario catalog.
///
/// # Errors
///
/// Returns an error only if one of the emitters fails to serialize or write
/// its file; missing site assets are reported and do not fail the run.
pub fn run(args: &GenerateArgs) -> Result<()> {
    println!("Affirm Integration Testing Suite - Site Generator");
    println!("{}", "=".repeat(50));

    let report = structure::check(&args.site_dir);
    if report.is_complete() {
        println!("✓ All required files present");
    } else {
        println!("⚠ Missing files: {}", report.missing_joined());
    }

    config::write(&args.site_dir)?;
    println!(
        "✓ Configuration file generated: {}",
        config::SITE_CONFIG_FILE
    );

    catalog::write(&args.site_dir)?;
    println!(
        "✓ Test scenarios file generated: {}",
        catalog::TEST_SCENARIOS_FILE
    );

    println!("\n✓ Site generation complete!");
    println!("\nNote: the HTML, CSS, and JS assets are maintained by hand.");
    println!("Edit the environment and scenario definitions in this tool, then re-run it.");

    Ok(())
}
