//! Core data types for the droidspec build-descriptor loader.
//!
//! This crate defines the typed schema of an `Android.toml` build descriptor
//! and all the pure logic that operates on it: required-field checks, the
//! constraint validation pass, resolution of externally supplied toolchain
//! defaults, ABI split planning, and environment-variable interpolation.
//!
//! This crate is intentionally free of async code and network I/O: a
//! descriptor is loaded once per invocation, validated, and handed off.

/// Conventional file name of the build descriptor at the project root.
pub const DESCRIPTOR_FILE: &str = "Android.toml";

/// Compile SDK used when scaffolding new descriptors.
pub const DEFAULT_COMPILE_SDK: u32 = 36;

/// Conventional env file read for `${env:VAR}` interpolation.
pub const ENV_FILE: &str = ".droidspec.env";

pub mod compat;
pub mod descriptor;
pub mod properties;
pub mod resolve;
pub mod splits;
pub mod template;
pub mod validate;
pub mod variant;
