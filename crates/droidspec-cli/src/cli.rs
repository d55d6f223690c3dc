//! CLI argument definitions for droidspec.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "droidspec",
    version,
    about = "Loader and validator for declarative Android build descriptors",
    long_about = "droidspec reads an Android.toml build descriptor, validates its version \
                  bounds, compatibility levels, signing policy and split policy, resolves \
                  toolchain-supplied defaults, and prints the resolved descriptor for an \
                  external build orchestrator."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load, resolve, and validate the descriptor
    Check,

    /// Print the resolved, validated descriptor
    Resolve {
        /// Emit JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Print the planned output artifacts for a build variant
    Artifacts {
        /// Build variant (e.g., debug, release)
        #[arg(long, default_value = "release")]
        variant: String,
        /// Emit JSON instead of tab-separated text
        #[arg(long)]
        json: bool,
        /// Acknowledge a release variant signed with a debug-only config
        #[arg(long)]
        allow_insecure_signing: bool,
    },

    /// Scaffold a starter Android.toml in the current directory
    Init {
        /// Reverse-domain application namespace
        #[arg(long, default_value = "com.example.app")]
        namespace: String,
        /// Overwrite an existing descriptor
        #[arg(long)]
        force: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
