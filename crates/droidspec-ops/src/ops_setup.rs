//! Project and toolchain preflight shared by `check`, `resolve`, and
//! `artifacts`.
//!
//! Locates the descriptor by walking up from the invocation directory,
//! discovers the ambient Android SDK, and builds the external defaults that
//! resolution merges in.

use std::path::{Path, PathBuf};

use droidspec_core::resolve::ExternalDefaults;
use droidspec_core::DESCRIPTOR_FILE;
use droidspec_toolchain::defaults;
use droidspec_toolchain::sdk::{self, AndroidSdkInfo};
use droidspec_util::errors::DescriptorError;

/// Result of a successful preflight.
pub struct PreflightResult {
    /// Directory containing the descriptor.
    pub project_dir: PathBuf,
    /// Full path to the descriptor file.
    pub descriptor_path: PathBuf,
    /// Discovered Android SDK, when one is installed.
    pub android_sdk: Option<AndroidSdkInfo>,
    /// External defaults derived from the ambient toolchain.
    pub defaults: ExternalDefaults,
}

/// Locate the project descriptor and gather the ambient toolchain context.
///
/// Missing SDK is not an error here: validation works offline and the
/// conventional fallback defaults apply. A missing descriptor is fatal.
pub fn preflight(start_dir: &Path) -> miette::Result<PreflightResult> {
    let project_dir = droidspec_util::fs::find_ancestor_with(start_dir, DESCRIPTOR_FILE)
        .ok_or_else(|| DescriptorError::Generic {
            message: format!("Could not find {DESCRIPTOR_FILE} in this directory or any parent"),
        })?;
    let descriptor_path = project_dir.join(DESCRIPTOR_FILE);

    let android_sdk = sdk::discover_android_sdk();
    if android_sdk.is_none() {
        tracing::debug!("no Android SDK found; using fallback defaults");
    }
    let defaults = defaults::ambient_defaults(android_sdk.as_ref());

    Ok(PreflightResult {
        project_dir,
        descriptor_path,
        android_sdk,
        defaults,
    })
}

/// Print a short summary of the ambient context (verbose mode).
pub fn print_preflight_summary(preflight: &PreflightResult) {
    match &preflight.android_sdk {
        Some(info) => {
            droidspec_util::progress::status_info(
                "Toolchain",
                &format!(
                    "Android SDK at {} ({} platforms, {} NDKs)",
                    info.home.display(),
                    info.installed_platforms.len(),
                    info.installed_ndks.len()
                ),
            );
        }
        None => {
            droidspec_util::progress::status_info(
                "Toolchain",
                &format!(
                    "no Android SDK found, assuming min SDK {}",
                    preflight.defaults.min_sdk
                ),
            );
        }
    }
}
