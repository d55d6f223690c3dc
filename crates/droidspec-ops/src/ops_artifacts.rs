//! Operation: expand the split policy into the artifact plan for a variant.
//!
//! A release-like variant flagged with the insecure-default signing warning
//! only produces a plan when the operator explicitly acknowledges it with
//! `--allow-insecure-signing`.

use std::path::Path;

use droidspec_core::descriptor::Descriptor;
use droidspec_core::splits;
use droidspec_core::validate::{self, Warning};
use droidspec_util::errors::DescriptorError;
use droidspec_util::progress;

use crate::ops_setup;

pub fn artifacts(
    start_dir: &Path,
    variant: &str,
    json: bool,
    allow_insecure_signing: bool,
) -> miette::Result<()> {
    let preflight = ops_setup::preflight(start_dir)?;

    let descriptor = Descriptor::from_path(&preflight.descriptor_path)?;
    let resolved = descriptor.resolve(&preflight.defaults);
    let warnings = validate::validate(&resolved)?;

    for warning in &warnings {
        let insecure_for_variant = matches!(
            warning,
            Warning::InsecureDefaultSigning { variant: v, .. } if v == variant
        );
        if insecure_for_variant && !allow_insecure_signing {
            return Err(DescriptorError::Generic {
                message: format!(
                    "{warning}\n  Pass --allow-insecure-signing to produce this plan anyway."
                ),
            }
            .into());
        }
        progress::status_warn("Warning", &warning.to_string());
    }

    let plan = splits::artifact_plan(&resolved, variant)?;

    if json {
        let output =
            serde_json::to_string_pretty(&plan).map_err(|e| DescriptorError::Generic {
                message: format!("Failed to serialize artifact plan: {e}"),
            })?;
        println!("{output}");
    } else {
        for artifact in &plan {
            let abi = artifact.abi.as_deref().unwrap_or("universal");
            println!(
                "{}\t{}\tversionCode {}",
                artifact.file_name, abi, artifact.version_code
            );
        }
    }

    progress::status(
        "Finished",
        &format!("{} artifact(s) planned for variant `{variant}`", plan.len()),
    );
    Ok(())
}
