//! Check command implementation.

use miette::Result;

pub fn exec(verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(droidspec_util::errors::DescriptorError::Io)?;
    droidspec_ops::ops_check::check(&cwd, verbose)?;
    Ok(())
}
