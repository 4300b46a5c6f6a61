//! Scenario catalog command handlers.
//!
//! Implements `scenarios list` and `scenarios show`.

use std::fmt::Write as _;

use crate::catalog::{self, ScenarioCategory};
use crate::cli::args::{OutputFormat, ScenariosListArgs, ScenariosShowArgs};
use crate::error::{Result, SiteGenError};

/// List built-in scenarios.
///
/// Displays scenarios grouped by category (human) or as a JSON array.
///
/// # Errors
///
/// Returns an error if output serialization fails.
pub fn list(args: &ScenariosListArgs) -> Result<()> {
    let results = catalog::list_scenarios(args.category);

    match args.format {
        OutputFormat::Json => {
            let json_entries: Vec<serde_json::Value> = results
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "name": s.name,
                        "description": s.description,
                        "category": s.category.key(),
                        "parameters": s.parameters,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json_entries)?);
        }
        OutputFormat::Human => {
            if results.is_empty() {
                println!("No scenarios match the given filters.");
                return Ok(());
            }

            let total = results.len();
            println!("Built-in Test Scenarios ({total} available)\n");

            // Group by category in display order
            for cat in ScenarioCategory::all() {
                let in_cat: Vec<_> = results.iter().filter(|s| s.category == *cat).collect();
                if in_cat.is_empty() {
                    continue;
                }

                println!("  {}", cat.label());
                for s in in_cat {
                    let parameters = format!("[{}]", s.parameters.join(", "));
                    println!("    {:<28}{:<60}{parameters}", s.name, s.description);
                }
                println!();
            }

            println!("View a record: sitegen scenarios show <name>");
        }
    }

    Ok(())
}

/// Display one scenario record as pretty-printed JSON.
///
/// # Errors
///
/// Returns a usage error if the scenario name is not found.
pub fn show(args: &ScenariosShowArgs) -> Result<()> {
    let scenario = catalog::find_scenario(&args.name).ok_or_else(|| {
        let mut message = format!("Unknown scenario '{}'", args.name);

        if let Some(suggestion) = catalog::suggest_scenario(&args.name) {
            let _ = write!(message, "\n\nDid you mean '{suggestion}'?");
        }

        message.push_str("\n\nAvailable scenarios:");
        for name in catalog::scenario_names() {
            if let Some(s) = catalog::find_scenario(name) {
                let _ = write!(message, "\n  {:<28}{}", s.name, s.description);
            }
        }

        message.push_str("\n\nUse 'sitegen scenarios list' for full details.");
        SiteGenError::Usage(message)
    })?;

    println!("{}", serde_json::to_string_pretty(scenario)?);
    Ok(())
}
