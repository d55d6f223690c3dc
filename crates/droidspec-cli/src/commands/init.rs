//! Init command implementation.

use miette::Result;

pub fn exec(namespace: &str, force: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(droidspec_util::errors::DescriptorError::Io)?;
    droidspec_ops::ops_init::init(&cwd, namespace, force)
}
