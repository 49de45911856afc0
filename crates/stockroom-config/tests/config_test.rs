#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use stockroom_config::{Config, DEFAULT_URL, Profile, load_config_from, save_config_to};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(cfg.default_profile.as_deref(), Some("default"));
    assert_eq!(cfg.defaults.output, "table");
    assert_eq!(cfg.defaults.timeout, 30);
    assert!(cfg.profiles.is_empty());
}

#[test]
fn save_then_load_preserves_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config {
        default_profile: Some("warehouse".into()),
        ..Config::default()
    };
    cfg.defaults.color = "never".into();
    cfg.profiles.insert(
        "warehouse".into(),
        Profile {
            url: "https://warehouse.example.test/api".into(),
            insecure: Some(true),
            timeout: Some(10),
            ..Profile::default()
        },
    );
    save_config_to(&cfg, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn profile_url_defaults_when_omitted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "default_profile = \"local\"\n\n[profiles.local]\ntimeout = 3\n",
    )
    .unwrap();

    let cfg = load_config_from(&path).unwrap();
    let (name, profile) = cfg.resolve_profile(None).unwrap().unwrap();
    assert_eq!(name, "local");
    assert_eq!(profile.url, DEFAULT_URL);
    assert_eq!(profile.timeout, Some(3));
}
