//! Command dispatch and handler modules.

mod artifacts;
mod check;
mod init;
mod resolve;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check => check::exec(cli.verbose),
        Command::Resolve { json } => resolve::exec(json, cli.verbose),
        Command::Artifacts {
            variant,
            json,
            allow_insecure_signing,
        } => artifacts::exec(&variant, json, allow_insecure_signing),
        Command::Init { namespace, force } => init::exec(&namespace, force),
    }
}
