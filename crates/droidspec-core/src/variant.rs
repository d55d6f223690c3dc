use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named signing configuration from `[signing.<name>]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SigningConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystore: Option<String>,

    #[serde(default, rename = "key-alias", skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,

    /// Command producing the keystore password (so secrets stay out of the
    /// descriptor; combine with `${env:VAR}` interpolation).
    #[serde(default, rename = "store-password-cmd", skip_serializing_if = "Option::is_none")]
    pub store_password_cmd: Option<String>,

    /// Marks a config as suitable for debug builds only. Release-like
    /// variants referencing such a config are flagged as an insecure default.
    #[serde(default, rename = "debug-only")]
    pub debug_only: bool,
}

impl SigningConfig {
    /// The implicit `debug` config backed by the toolchain debug keystore.
    pub fn implicit_debug() -> Self {
        Self {
            keystore: None,
            key_alias: None,
            store_password_cmd: None,
            debug_only: true,
        }
    }
}

/// A build variant from `[variant.<name>]` with its signing and
/// optimization policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Name of the signing config this variant uses. Defaults to `debug`,
    /// which for release-like variants is the recognized insecure default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debuggable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,

    #[serde(default, rename = "application-id-suffix", skip_serializing_if = "Option::is_none")]
    pub application_id_suffix: Option<String>,
}

impl VariantConfig {
    /// The implicit development variant (debuggable, no minification).
    pub fn debug() -> Self {
        Self {
            signing: None,
            debuggable: Some(true),
            minify: Some(false),
            application_id_suffix: None,
        }
    }

    /// The implicit release variant (not debuggable, minified).
    pub fn release() -> Self {
        Self {
            signing: None,
            debuggable: Some(false),
            minify: Some(true),
            application_id_suffix: None,
        }
    }

    /// Whether this variant is debuggable. Undeclared variants named `debug`
    /// are debuggable by convention; everything else is not.
    pub fn is_debuggable(&self, name: &str) -> bool {
        self.debuggable.unwrap_or(name == "debug")
    }

    /// The signing config name this variant resolves to.
    pub fn signing_ref(&self) -> &str {
        self.signing.as_deref().unwrap_or("debug")
    }
}

/// The full variant map: the implicit `debug` and `release` variants
/// overlaid with everything declared in the descriptor (declared wins).
pub fn effective_variants(
    declared: &BTreeMap<String, VariantConfig>,
) -> BTreeMap<String, VariantConfig> {
    let mut variants = BTreeMap::new();
    variants.insert("debug".to_string(), VariantConfig::debug());
    variants.insert("release".to_string(), VariantConfig::release());
    for (name, config) in declared {
        variants.insert(name.clone(), config.clone());
    }
    variants
}

/// The full signing map: declared configs plus the implicit debug-only
/// `debug` config when none is declared.
pub fn effective_signing(
    declared: &BTreeMap<String, SigningConfig>,
) -> BTreeMap<String, SigningConfig> {
    let mut configs = declared.clone();
    configs
        .entry("debug".to_string())
        .or_insert_with(SigningConfig::implicit_debug);
    configs
}
