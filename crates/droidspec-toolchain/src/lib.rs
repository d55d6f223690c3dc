//! Ambient toolchain context: Android SDK discovery from the environment,
//! platform and NDK inventory, and production of the external defaults
//! consumed by descriptor resolution.

pub mod defaults;
pub mod sdk;
pub mod version;
