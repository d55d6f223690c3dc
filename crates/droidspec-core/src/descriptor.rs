use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use droidspec_util::errors::DescriptorError;

use crate::splits::SplitsConfig;
use crate::variant::{SigningConfig, VariantConfig};

/// The parsed representation of an `Android.toml` build descriptor.
///
/// Immutable for the duration of a build invocation. Fields left `None` are
/// filled from externally supplied toolchain defaults by
/// [`Descriptor::resolve`](crate::resolve).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub sdk: SdkConfig,

    #[serde(default, rename = "compile-options")]
    pub compile_options: CompileOptions,

    #[serde(default)]
    pub plugins: BTreeMap<String, PluginRef>,

    #[serde(default)]
    pub signing: BTreeMap<String, SigningConfig>,

    #[serde(default)]
    pub variant: BTreeMap<String, VariantConfig>,

    #[serde(default)]
    pub splits: SplitsConfig,
}

/// Application identity from the `[application]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Reverse-domain package namespace (e.g. `com.example.app`). Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Store-facing application id. Defaults to the namespace.
    #[serde(default, rename = "application-id", skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    /// Monotonically increasing integer identifying a build for store upload
    /// ordering. Defaults to 1.
    #[serde(default, rename = "version-code", skip_serializing_if = "Option::is_none")]
    pub version_code: Option<u32>,

    /// Free-form display version. No uniqueness constraint.
    #[serde(default, rename = "version-name", skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,

    #[serde(default)]
    pub multidex: bool,
}

/// SDK version bounds from the `[sdk]` section.
///
/// `min` and `ndk` are conventionally left unset and supplied by the ambient
/// toolchain context; `target` defaults to `compile` at resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// API level compiled against. Required; must be >= every plugin minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile: Option<u32>,

    /// Lowest supported API level. Must be <= `target`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,

    /// Advisory target API level. Must be <= `compile`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,

    /// Pinned NDK version (semver), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndk: Option<String>,
}

/// Language compatibility levels from `[compile-options]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Java source level token (e.g. `"11"`). Required.
    #[serde(default, rename = "source-compatibility", skip_serializing_if = "Option::is_none")]
    pub source_compatibility: Option<String>,

    /// Java bytecode target token. Required.
    #[serde(default, rename = "target-compatibility", skip_serializing_if = "Option::is_none")]
    pub target_compatibility: Option<String>,

    /// Kotlin JVM target token. Should match `target-compatibility`.
    #[serde(default, rename = "jvm-target", skip_serializing_if = "Option::is_none")]
    pub jvm_target: Option<String>,
}

/// A plugin reference, either a bare version string or a detailed specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
    Version(String),
    Detailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        version: Option<String>,
        /// Lowest compile SDK this plugin supports.
        #[serde(default, rename = "min-compile-sdk", skip_serializing_if = "Option::is_none")]
        min_compile_sdk: Option<u32>,
    },
}

impl PluginRef {
    /// The compile-SDK floor this plugin declares, if any.
    pub fn min_compile_sdk(&self) -> Option<u32> {
        match self {
            PluginRef::Version(_) => None,
            PluginRef::Detailed {
                min_compile_sdk, ..
            } => *min_compile_sdk,
        }
    }
}

impl Descriptor {
    /// Load and parse an `Android.toml` from the given path.
    ///
    /// Before parsing, `${env:VAR}` references in the descriptor content are
    /// resolved using `.droidspec.env` (if present alongside the descriptor)
    /// and process environment variables.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DescriptorError::Generic {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars =
            crate::properties::load_env_file(&dir.join(crate::ENV_FILE)).unwrap_or_default();
        let resolved = crate::properties::interpolate(&content, &env_vars);

        tracing::debug!("loaded descriptor from {}", path.display());
        Self::from_toml_str(&resolved)
    }

    /// Parse a descriptor from a TOML string (no interpolation).
    ///
    /// Fails with a syntax diagnostic on malformed TOML (the message carries
    /// the parser's line/column span) and with a missing-field diagnostic
    /// when a required attribute is absent.
    pub fn from_toml_str(content: &str) -> miette::Result<Self> {
        let descriptor: Descriptor = toml::from_str(content).map_err(|e| {
            DescriptorError::Syntax {
                message: e.to_string(),
            }
        })?;
        crate::validate::require_fields(&descriptor)?;
        Ok(descriptor)
    }

    /// Serialize the descriptor back to its declarative TOML form.
    ///
    /// Reloading the output yields an equal descriptor.
    pub fn to_toml_string(&self) -> miette::Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            DescriptorError::Generic {
                message: format!("Failed to serialize descriptor: {e}"),
            }
            .into()
        })
    }

    /// SHA-256 fingerprint of the canonical serialized form, for downstream
    /// build-cache keying.
    pub fn fingerprint(&self) -> miette::Result<String> {
        let canonical = self.to_toml_string()?;
        Ok(droidspec_util::hash::sha256_bytes(canonical.as_bytes()))
    }

    /// The store-facing application id: declared value, or the namespace.
    pub fn application_id(&self) -> Option<&str> {
        self.application
            .application_id
            .as_deref()
            .or(self.application.namespace.as_deref())
    }
}
