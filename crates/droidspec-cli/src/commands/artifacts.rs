//! Artifacts command implementation.

use miette::Result;

pub fn exec(variant: &str, json: bool, allow_insecure_signing: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(droidspec_util::errors::DescriptorError::Io)?;
    droidspec_ops::ops_artifacts::artifacts(&cwd, variant, json, allow_insecure_signing)
}
