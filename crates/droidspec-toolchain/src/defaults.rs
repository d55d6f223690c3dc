//! Turning a toolchain inventory into the descriptor's external defaults.

use droidspec_core::resolve::ExternalDefaults;

use crate::sdk::AndroidSdkInfo;

/// Build the external defaults from a discovered SDK (or its absence).
///
/// Without an SDK the conventional fallbacks apply, so validation still
/// works on machines with no Android toolchain installed.
pub fn ambient_defaults(sdk: Option<&AndroidSdkInfo>) -> ExternalDefaults {
    let mut defaults = ExternalDefaults::default();
    if let Some(info) = sdk {
        defaults.ndk = info.newest_ndk().map(|v| v.to_string());
    }
    defaults
}
