use droidspec_toolchain::sdk;
use tempfile::TempDir;

fn fake_sdk(platforms: &[u32], ndks: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for api in platforms {
        std::fs::create_dir_all(tmp.path().join("platforms").join(format!("android-{api}")))
            .unwrap();
    }
    for ndk in ndks {
        std::fs::create_dir_all(tmp.path().join("ndk").join(ndk)).unwrap();
    }
    tmp
}

#[test]
fn inventory_finds_platforms_sorted() {
    let tmp = fake_sdk(&[36, 21, 34], &[]);
    let info = sdk::inventory_android_sdk(tmp.path());
    assert_eq!(info.installed_platforms, vec![21, 34, 36]);
}

#[test]
fn inventory_ignores_non_platform_dirs() {
    let tmp = fake_sdk(&[34], &[]);
    std::fs::create_dir_all(tmp.path().join("platforms").join("not-a-platform")).unwrap();
    let info = sdk::inventory_android_sdk(tmp.path());
    assert_eq!(info.installed_platforms, vec![34]);
}

#[test]
fn inventory_finds_ndks_sorted() {
    let tmp = fake_sdk(&[], &["27.0.12077973", "25.1.8937393"]);
    let info = sdk::inventory_android_sdk(tmp.path());
    assert_eq!(info.installed_ndks.len(), 2);
    assert_eq!(info.newest_ndk().unwrap().to_string(), "27.0.12077973");
}

#[test]
fn inventory_empty_sdk_dir() {
    let tmp = TempDir::new().unwrap();
    let info = sdk::inventory_android_sdk(tmp.path());
    assert!(info.installed_platforms.is_empty());
    assert!(info.installed_ndks.is_empty());
    assert!(info.newest_ndk().is_none());
}

#[test]
fn has_platform_checks_inventory() {
    let tmp = fake_sdk(&[34, 36], &[]);
    let info = sdk::inventory_android_sdk(tmp.path());
    assert!(info.has_platform(36));
    assert!(!info.has_platform(35));
}
