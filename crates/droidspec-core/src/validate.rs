use std::fmt;

use droidspec_util::errors::DescriptorError;

use crate::compat::JavaLevel;
use crate::descriptor::Descriptor;
use crate::splits::KNOWN_ABIS;
use crate::variant;

/// A non-fatal validation finding, surfaced to build output without
/// blocking the descriptor handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A release-like variant is signed with a debug-only config. Producing
    /// a distributable artifact from it requires explicit acknowledgment.
    InsecureDefaultSigning { variant: String, signing: String },

    /// The Kotlin JVM target disagrees with the Java bytecode target.
    JvmTargetMismatch {
        jvm_target: String,
        target_compatibility: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InsecureDefaultSigning { variant, signing } => write!(
                f,
                "variant `{variant}` is signed with the debug-only config `{signing}`; \
                 a store-distributable artifact requires a dedicated signing config"
            ),
            Warning::JvmTargetMismatch {
                jvm_target,
                target_compatibility,
            } => write!(
                f,
                "jvm-target `{jvm_target}` does not match target-compatibility \
                 `{target_compatibility}`"
            ),
        }
    }
}

/// Check that every required attribute is declared.
///
/// Runs as part of loading, so a source missing its namespace, compile SDK,
/// or compatibility levels never produces a usable descriptor.
pub fn require_fields(descriptor: &Descriptor) -> miette::Result<()> {
    if descriptor.application.namespace.is_none() {
        return Err(missing_err("application.namespace"));
    }
    if descriptor.sdk.compile.is_none() {
        return Err(missing_err("sdk.compile"));
    }
    if descriptor.compile_options.source_compatibility.is_none() {
        return Err(missing_err("compile-options.source-compatibility"));
    }
    if descriptor.compile_options.target_compatibility.is_none() {
        return Err(missing_err("compile-options.target-compatibility"));
    }
    Ok(())
}

/// Enforce every descriptor constraint, returning the non-fatal findings.
///
/// Fatal on the first violated constraint, with the failing field named.
/// Call on the resolved descriptor so externally defaulted fields take part
/// in the ordering checks.
pub fn validate(descriptor: &Descriptor) -> miette::Result<Vec<Warning>> {
    require_fields(descriptor)?;
    let mut warnings = Vec::new();

    check_namespace(descriptor)?;
    check_version_code(descriptor)?;
    check_sdk_ordering(descriptor)?;
    check_compat_levels(descriptor, &mut warnings)?;
    check_ndk(descriptor)?;
    check_plugins(descriptor)?;
    check_splits(descriptor)?;
    check_variants(descriptor, &mut warnings)?;

    Ok(warnings)
}

fn check_namespace(descriptor: &Descriptor) -> miette::Result<()> {
    let namespace = descriptor
        .application
        .namespace
        .as_deref()
        .ok_or_else(|| missing_err("application.namespace"))?;

    if !is_reverse_domain(namespace) {
        return Err(constraint(
            "application.namespace",
            format!("`{namespace}` is not a reverse-domain identifier (e.g. com.example.app)"),
        ));
    }
    Ok(())
}

fn check_version_code(descriptor: &Descriptor) -> miette::Result<()> {
    if descriptor.application.version_code == Some(0) {
        return Err(constraint(
            "application.version-code",
            "version code must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

fn check_sdk_ordering(descriptor: &Descriptor) -> miette::Result<()> {
    let sdk = &descriptor.sdk;
    let compile = sdk
        .compile
        .ok_or_else(|| missing_err("sdk.compile"))?;
    let target = sdk.target.unwrap_or(compile);

    if target > compile {
        return Err(constraint(
            "sdk.target",
            format!("target SDK {target} exceeds compile SDK {compile}"),
        ));
    }
    if let Some(min) = sdk.min {
        if min > target {
            return Err(constraint(
                "sdk.min",
                format!("min SDK {min} exceeds target SDK {target}"),
            ));
        }
    }
    Ok(())
}

fn check_compat_levels(
    descriptor: &Descriptor,
    warnings: &mut Vec<Warning>,
) -> miette::Result<()> {
    let options = &descriptor.compile_options;
    let source = parse_level(
        options.source_compatibility.as_deref(),
        "compile-options.source-compatibility",
    )?;
    let target = parse_level(
        options.target_compatibility.as_deref(),
        "compile-options.target-compatibility",
    )?;

    if source > target {
        return Err(constraint(
            "compile-options.source-compatibility",
            format!("source level {source} exceeds target level {target}"),
        ));
    }

    if let Some(jvm_token) = options.jvm_target.as_deref() {
        let jvm = parse_level(Some(jvm_token), "compile-options.jvm-target")?;
        if jvm != target {
            warnings.push(Warning::JvmTargetMismatch {
                jvm_target: jvm_token.to_string(),
                target_compatibility: target.token().to_string(),
            });
        }
    }
    Ok(())
}

fn check_ndk(descriptor: &Descriptor) -> miette::Result<()> {
    if let Some(ndk) = descriptor.sdk.ndk.as_deref() {
        if semver::Version::parse(ndk).is_err() {
            return Err(constraint(
                "sdk.ndk",
                format!("`{ndk}` is not a valid NDK version (expected MAJOR.MINOR.PATCH)"),
            ));
        }
    }
    Ok(())
}

fn check_plugins(descriptor: &Descriptor) -> miette::Result<()> {
    let compile = descriptor.sdk.compile.unwrap_or_default();
    for (id, plugin) in &descriptor.plugins {
        if let Some(floor) = plugin.min_compile_sdk() {
            if compile < floor {
                return Err(constraint(
                    "sdk.compile",
                    format!("plugin `{id}` requires compile SDK >= {floor}, found {compile}"),
                ));
            }
        }
    }
    Ok(())
}

fn check_splits(descriptor: &Descriptor) -> miette::Result<()> {
    for abi in &descriptor.splits.abi.include {
        if !KNOWN_ABIS.contains(&abi.as_str()) {
            return Err(constraint(
                "splits.abi.include",
                format!(
                    "unknown ABI `{abi}` (expected one of {})",
                    KNOWN_ABIS.join(", ")
                ),
            ));
        }
    }
    Ok(())
}

fn check_variants(descriptor: &Descriptor, warnings: &mut Vec<Warning>) -> miette::Result<()> {
    let variants = variant::effective_variants(&descriptor.variant);
    let signing = variant::effective_signing(&descriptor.signing);

    for (name, config) in &variants {
        let signing_ref = config.signing_ref();
        let Some(signing_config) = signing.get(signing_ref) else {
            return Err(constraint(
                &format!("variant.{name}.signing"),
                format!("references undeclared signing config `{signing_ref}`"),
            ));
        };

        if !config.is_debuggable(name) && signing_config.debug_only {
            warnings.push(Warning::InsecureDefaultSigning {
                variant: name.clone(),
                signing: signing_ref.to_string(),
            });
        }
    }
    Ok(())
}

fn parse_level(token: Option<&str>, field: &str) -> miette::Result<JavaLevel> {
    let token = token.ok_or_else(|| missing_err(field))?;
    JavaLevel::parse(token).ok_or_else(|| {
        constraint(
            field,
            format!(
                "unknown Java level token `{token}` (expected one of {})",
                JavaLevel::ACCEPTED_TOKENS
            ),
        )
    })
}

/// Reverse-domain shape: at least two dot-separated segments, each a valid
/// identifier.
fn is_reverse_domain(s: &str) -> bool {
    let segments: Vec<&str> = s.split('.').collect();
    if segments.len() < 2 {
        return false;
    }
    segments.iter().all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

fn missing_err(field: &str) -> miette::Report {
    DescriptorError::MissingField {
        field: field.to_string(),
    }
    .into()
}

fn constraint(field: &str, reason: String) -> miette::Report {
    DescriptorError::Constraint {
        field: field.to_string(),
        reason,
    }
    .into()
}
