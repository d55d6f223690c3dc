use serde::{Deserialize, Serialize};

use droidspec_util::errors::DescriptorError;

use crate::descriptor::Descriptor;
use crate::variant;

/// CPU architectures the Android toolchain can package for.
pub const KNOWN_ABIS: [&str; 4] = ["arm64-v8a", "armeabi-v7a", "x86", "x86_64"];

/// Output-splitting policy from the `[splits]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitsConfig {
    #[serde(default)]
    pub abi: AbiSplit,
}

/// Per-architecture split policy from `[splits.abi]`.
///
/// Disabled means one universal artifact is produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbiSplit {
    #[serde(default)]
    pub enable: bool,

    /// ABIs to split on. Empty means all known ABIs.
    #[serde(default)]
    pub include: Vec<String>,

    /// Also emit a universal artifact alongside the per-ABI ones.
    #[serde(default)]
    pub universal: bool,
}

impl AbiSplit {
    /// The ABIs this policy expands to when splitting is enabled.
    pub fn abis(&self) -> Vec<String> {
        if self.include.is_empty() {
            KNOWN_ABIS.iter().map(|s| s.to_string()).collect()
        } else {
            self.include.clone()
        }
    }
}

/// One planned output artifact for a build variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactSpec {
    pub file_name: String,
    /// `None` for a universal artifact.
    pub abi: Option<String>,
    pub version_code: u32,
}

/// Expand the split policy into the output artifacts for one variant.
///
/// Splits disabled yields exactly one universal artifact; enabled yields one
/// per included ABI, plus a universal one when the policy asks for it.
pub fn artifact_plan(descriptor: &Descriptor, variant_name: &str) -> miette::Result<Vec<ArtifactSpec>> {
    let variants = variant::effective_variants(&descriptor.variant);
    if !variants.contains_key(variant_name) {
        return Err(DescriptorError::Generic {
            message: format!("Unknown variant '{variant_name}'"),
        }
        .into());
    }

    let version_code = descriptor.application.version_code.unwrap_or(1);
    let policy = &descriptor.splits.abi;

    if !policy.enable {
        return Ok(vec![ArtifactSpec {
            file_name: format!("app-{variant_name}.apk"),
            abi: None,
            version_code,
        }]);
    }

    let mut plan: Vec<ArtifactSpec> = policy
        .abis()
        .into_iter()
        .map(|abi| ArtifactSpec {
            file_name: format!("app-{abi}-{variant_name}.apk"),
            abi: Some(abi),
            version_code,
        })
        .collect();

    if policy.universal {
        plan.push(ArtifactSpec {
            file_name: format!("app-universal-{variant_name}.apk"),
            abi: None,
            version_code,
        });
    }

    Ok(plan)
}
