//! Resolve command implementation.

use miette::Result;

pub fn exec(json: bool, verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(droidspec_util::errors::DescriptorError::Io)?;
    droidspec_ops::ops_resolve::resolve(&cwd, json, verbose)
}
