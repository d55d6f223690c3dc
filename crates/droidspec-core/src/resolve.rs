use crate::descriptor::Descriptor;

/// Lowest API level modern NDK toolchains support; used when no ambient
/// toolchain supplies a minimum.
pub const DEFAULT_MIN_SDK: u32 = 21;

/// Default display version for descriptors that declare none.
pub const DEFAULT_VERSION_NAME: &str = "1.0";

/// Ambient defaults supplied by an external toolchain/plugin context.
///
/// This is explicit dependency injection: resolution takes the context as an
/// argument rather than reading hidden global state.
#[derive(Debug, Clone)]
pub struct ExternalDefaults {
    /// Minimum supported API level the toolchain mandates.
    pub min_sdk: u32,

    /// Advisory target API level, if the toolchain pins one.
    pub target_sdk: Option<u32>,

    /// NDK version the toolchain ships with, if any.
    pub ndk: Option<String>,
}

impl Default for ExternalDefaults {
    fn default() -> Self {
        Self {
            min_sdk: DEFAULT_MIN_SDK,
            target_sdk: None,
            ndk: None,
        }
    }
}

impl Descriptor {
    /// Fill unspecified fields from the external toolchain context.
    ///
    /// A pure merge: a locally declared value always wins over an external
    /// default. The input descriptor is not mutated.
    pub fn resolve(&self, defaults: &ExternalDefaults) -> Descriptor {
        let mut resolved = self.clone();

        let app = &mut resolved.application;
        if app.application_id.is_none() {
            app.application_id = app.namespace.clone();
        }
        if app.version_code.is_none() {
            app.version_code = Some(1);
        }
        if app.version_name.is_none() {
            app.version_name = Some(DEFAULT_VERSION_NAME.to_string());
        }

        let sdk = &mut resolved.sdk;
        if sdk.min.is_none() {
            sdk.min = Some(defaults.min_sdk);
        }
        if sdk.target.is_none() {
            sdk.target = defaults.target_sdk.or(sdk.compile);
        }
        if sdk.ndk.is_none() {
            sdk.ndk = defaults.ndk.clone();
        }

        resolved
    }
}
