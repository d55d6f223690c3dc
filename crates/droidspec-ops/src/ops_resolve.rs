//! Operation: print the resolved, validated descriptor for handoff.
//!
//! Stdout carries only the descriptor (TOML, or JSON with `json = true`);
//! status lines and warnings go to stderr so the output stays consumable by
//! an external orchestrator.

use std::path::Path;

use droidspec_core::descriptor::Descriptor;
use droidspec_core::validate;
use droidspec_util::errors::DescriptorError;
use droidspec_util::progress;

use crate::ops_setup;

pub fn resolve(start_dir: &Path, json: bool, verbose: bool) -> miette::Result<()> {
    let preflight = ops_setup::preflight(start_dir)?;
    if verbose {
        ops_setup::print_preflight_summary(&preflight);
    }

    let descriptor = Descriptor::from_path(&preflight.descriptor_path)?;
    let resolved = descriptor.resolve(&preflight.defaults);
    let warnings = validate::validate(&resolved)?;
    for warning in &warnings {
        progress::status_warn("Warning", &warning.to_string());
    }

    let output = if json {
        serde_json::to_string_pretty(&resolved).map_err(|e| DescriptorError::Generic {
            message: format!("Failed to serialize descriptor: {e}"),
        })?
    } else {
        resolved.to_toml_string()?
    };
    println!("{output}");
    Ok(())
}
