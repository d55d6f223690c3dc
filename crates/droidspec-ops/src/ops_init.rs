//! Operation: scaffold a starter descriptor in the current directory.

use std::path::Path;

use droidspec_core::template::{self, TemplateContext};
use droidspec_core::{DEFAULT_COMPILE_SDK, DESCRIPTOR_FILE};
use droidspec_util::errors::DescriptorError;
use droidspec_util::progress;

pub fn init(dir: &Path, namespace: &str, force: bool) -> miette::Result<()> {
    let path = dir.join(DESCRIPTOR_FILE);
    if path.exists() && !force {
        return Err(DescriptorError::Generic {
            message: format!(
                "{DESCRIPTOR_FILE} already exists here (pass --force to overwrite)"
            ),
        }
        .into());
    }

    let ctx = TemplateContext::new(namespace, DEFAULT_COMPILE_SDK);
    let content = template::render_starter(&ctx);
    std::fs::write(&path, content).map_err(DescriptorError::Io)?;

    progress::status("Created", &path.display().to_string());
    Ok(())
}
