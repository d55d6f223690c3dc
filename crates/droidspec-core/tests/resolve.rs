use droidspec_core::descriptor::Descriptor;
use droidspec_core::resolve::{ExternalDefaults, DEFAULT_MIN_SDK, DEFAULT_VERSION_NAME};

const MINIMAL: &str = r#"
[application]
namespace = "com.example.app"

[sdk]
compile = 36

[compile-options]
source-compatibility = "11"
target-compatibility = "11"
"#;

#[test]
fn resolve_fills_min_target_and_identity() {
    let descriptor = Descriptor::from_toml_str(MINIMAL).unwrap();
    let resolved = descriptor.resolve(&ExternalDefaults::default());

    assert_eq!(resolved.sdk.min, Some(DEFAULT_MIN_SDK));
    assert_eq!(resolved.sdk.target, Some(36), "target defaults to compile");
    assert_eq!(
        resolved.application.application_id.as_deref(),
        Some("com.example.app")
    );
    assert_eq!(resolved.application.version_code, Some(1));
    assert_eq!(
        resolved.application.version_name.as_deref(),
        Some(DEFAULT_VERSION_NAME)
    );
}

#[test]
fn resolve_is_a_pure_merge_locally_declared_wins() {
    let descriptor = Descriptor::from_toml_str(
        r#"
[application]
namespace = "com.example.app"
application-id = "com.example.app.free"
version-code = 42
version-name = "4.2.0"

[sdk]
compile = 36
min = 24
target = 34
ndk = "26.3.11579264"

[compile-options]
source-compatibility = "11"
target-compatibility = "11"
"#,
    )
    .unwrap();

    let defaults = ExternalDefaults {
        min_sdk: 21,
        target_sdk: Some(35),
        ndk: Some("27.0.12077973".to_string()),
    };
    let resolved = descriptor.resolve(&defaults);

    assert_eq!(resolved.sdk.min, Some(24));
    assert_eq!(resolved.sdk.target, Some(34));
    assert_eq!(resolved.sdk.ndk.as_deref(), Some("26.3.11579264"));
    assert_eq!(
        resolved.application.application_id.as_deref(),
        Some("com.example.app.free")
    );
    assert_eq!(resolved.application.version_code, Some(42));
}

#[test]
fn resolve_takes_toolchain_ndk_when_undeclared() {
    let descriptor = Descriptor::from_toml_str(MINIMAL).unwrap();
    let defaults = ExternalDefaults {
        min_sdk: 23,
        target_sdk: None,
        ndk: Some("27.0.12077973".to_string()),
    };
    let resolved = descriptor.resolve(&defaults);

    assert_eq!(resolved.sdk.min, Some(23));
    assert_eq!(resolved.sdk.ndk.as_deref(), Some("27.0.12077973"));
}

#[test]
fn resolve_does_not_mutate_the_input() {
    let descriptor = Descriptor::from_toml_str(MINIMAL).unwrap();
    let before = descriptor.clone();
    let _ = descriptor.resolve(&ExternalDefaults::default());
    assert_eq!(descriptor, before);
}

#[test]
fn resolve_is_idempotent() {
    let descriptor = Descriptor::from_toml_str(MINIMAL).unwrap();
    let defaults = ExternalDefaults::default();
    let once = descriptor.resolve(&defaults);
    let twice = once.resolve(&defaults);
    assert_eq!(once, twice);
}
