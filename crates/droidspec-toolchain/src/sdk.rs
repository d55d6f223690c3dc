//! Android SDK discovery and component inventory.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::version::NdkVersion;

/// Inventory of a discovered Android SDK installation.
#[derive(Debug, Clone)]
pub struct AndroidSdkInfo {
    pub home: PathBuf,
    pub installed_platforms: Vec<u32>,
    pub installed_ndks: Vec<NdkVersion>,
}

impl AndroidSdkInfo {
    /// Whether the platform for the given compile SDK is installed.
    pub fn has_platform(&self, compile_sdk: u32) -> bool {
        self.installed_platforms.contains(&compile_sdk)
    }

    /// The newest installed NDK, if any.
    pub fn newest_ndk(&self) -> Option<&NdkVersion> {
        self.installed_ndks.last()
    }
}

/// Discover an installed Android SDK and inventory its components.
///
/// Checks `ANDROID_HOME`, `ANDROID_SDK_ROOT`, and the conventional install
/// locations, in that order.
pub fn discover_android_sdk() -> Option<AndroidSdkInfo> {
    let candidates: Vec<PathBuf> = [
        std::env::var("ANDROID_HOME").ok().map(PathBuf::from),
        std::env::var("ANDROID_SDK_ROOT").ok().map(PathBuf::from),
        dirs_home().map(|h| h.join("Android/Sdk")),
        dirs_home().map(|h| h.join("Library/Android/sdk")),
    ]
    .into_iter()
    .flatten()
    .collect();

    for dir in candidates {
        if dir.is_dir() {
            tracing::debug!("using Android SDK at {}", dir.display());
            return Some(inventory_android_sdk(&dir));
        }
    }
    None
}

/// Scan an Android SDK directory to find installed platforms and NDKs.
pub fn inventory_android_sdk(home: &Path) -> AndroidSdkInfo {
    let mut installed_platforms: Vec<u32> = fs::read_dir(home.join("platforms"))
        .into_iter()
        .flatten()
        .filter_map(|e| {
            let name = e.ok()?.file_name().to_string_lossy().to_string();
            name.strip_prefix("android-")?.parse().ok()
        })
        .collect();
    installed_platforms.sort();

    // NDKs live under <sdk>/ndk/<version>/
    let mut installed_ndks: Vec<NdkVersion> = fs::read_dir(home.join("ndk"))
        .into_iter()
        .flatten()
        .filter_map(|e| {
            let name = e.ok()?.file_name().to_string_lossy().to_string();
            NdkVersion::from_str(&name).ok()
        })
        .collect();
    installed_ndks.sort();

    AndroidSdkInfo {
        home: home.to_path_buf(),
        installed_platforms,
        installed_ndks,
    }
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(PathBuf::from)
}
