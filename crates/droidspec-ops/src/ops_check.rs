//! Operation: load, resolve, and validate the descriptor.
//!
//! This is the fail-fast gate: every fatal finding aborts with the failing
//! field named before anything is handed to an external orchestrator.
//! Warnings are surfaced but do not block.

use std::path::Path;

use droidspec_core::descriptor::Descriptor;
use droidspec_core::validate;
use droidspec_util::progress;

use crate::ops_setup;

/// Validate the project descriptor. Returns the number of warnings.
pub fn check(start_dir: &Path, verbose: bool) -> miette::Result<usize> {
    let preflight = ops_setup::preflight(start_dir)?;
    if verbose {
        ops_setup::print_preflight_summary(&preflight);
    }

    let descriptor = Descriptor::from_path(&preflight.descriptor_path)?;
    let application_id = descriptor.application_id().unwrap_or("<unset>").to_string();
    progress::status("Checking", &application_id);

    let resolved = descriptor.resolve(&preflight.defaults);
    let warnings = validate::validate(&resolved)?;

    for warning in &warnings {
        progress::status_warn("Warning", &warning.to_string());
    }

    if verbose {
        if let Some(info) = &preflight.android_sdk {
            if let Some(compile) = resolved.sdk.compile {
                if !info.has_platform(compile) {
                    progress::status_warn(
                        "Warning",
                        &format!("platform android-{compile} is not installed in the SDK"),
                    );
                }
            }
        }
        let fingerprint = resolved.fingerprint()?;
        progress::status_info(
            "Fingerprint",
            droidspec_util::hash::short_digest(&fingerprint),
        );
    }

    progress::status(
        "Finished",
        &format!("{application_id} validated, {} warning(s)", warnings.len()),
    );
    Ok(warnings.len())
}
