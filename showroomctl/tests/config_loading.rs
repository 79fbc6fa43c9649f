use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use showroom_core::LeavePolicy;
use showroomctl::{ConfigLoadError, ConfigLoader, ConfigSource};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loaded = ConfigLoader::new()
        .with_search_dir(dir.path())
        .load_with(env(&[]))
        .expect("load");

    assert_eq!(loaded.source, ConfigSource::Default);
    assert_eq!(loaded.config.testimonials.interval, Duration::from_secs(7));
    assert!(loaded.warnings.is_empty());
}

#[test]
fn picks_up_showroom_toml_in_search_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("showroom.toml");
    fs::write(&path, "[products]\nleave_policy = \"reset\"\n").expect("write");

    let loaded = ConfigLoader::new()
        .with_search_dir(dir.path())
        .load_with(env(&[]))
        .expect("load");

    assert_eq!(loaded.source, ConfigSource::File(path));
    assert_eq!(loaded.config.products.leave_policy, LeavePolicy::Reset);
}

#[test]
fn inline_env_beats_search_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("showroom.toml"), "[gallery]\ninterval = \"9s\"\n")
        .expect("write");

    let loaded = ConfigLoader::new()
        .with_search_dir(dir.path())
        .load_with(env(&[(
            "SHOWROOM_CONFIG_TOML",
            "[gallery]\ninterval = \"2s\"\n",
        )]))
        .expect("load");

    assert_eq!(loaded.source, ConfigSource::EnvInline);
    assert_eq!(loaded.config.gallery.interval, Duration::from_secs(2));
}

#[test]
fn env_path_beats_inline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("env.toml");
    fs::write(&path, "[testimonials]\ninterval = \"10s\"\n").expect("write");
    let path_str = path.display().to_string();

    let loaded = ConfigLoader::new()
        .with_search_dir(dir.path())
        .load_with(env(&[
            ("SHOWROOM_CONFIG_PATH", path_str.as_str()),
            ("SHOWROOM_CONFIG_TOML", "[testimonials]\ninterval = \"1s\"\n"),
        ]))
        .expect("load");

    assert_eq!(loaded.source, ConfigSource::EnvPath(path));
    assert_eq!(loaded.config.testimonials.interval, Duration::from_secs(10));
}

#[test]
fn explicit_path_beats_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "[gallery]\nslide_distance = 120.0\n").expect("write");

    let loaded = ConfigLoader::new()
        .with_search_dir(dir.path())
        .with_explicit_path(Some(explicit.clone()))
        .load_with(env(&[("SHOWROOM_CONFIG_TOML", "not toml at all")]))
        .expect("load");

    assert_eq!(loaded.source, ConfigSource::Explicit(explicit));
    assert_eq!(loaded.config.gallery.slide_distance, 120.0);
}

#[test]
fn missing_explicit_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ConfigLoader::new()
        .with_explicit_path(Some(dir.path().join("absent.toml")))
        .load_with(env(&[]))
        .expect_err("missing file");
    assert!(matches!(err, ConfigLoadError::ConfigFileIo { .. }));
}

#[test]
fn parse_errors_name_their_origin() {
    let err = ConfigLoader::new()
        .with_search_dir(tempfile::tempdir().expect("tempdir").path())
        .load_with(env(&[("SHOWROOM_CONFIG_TOML", "[gallery\n")]))
        .expect_err("parse error");
    match err {
        ConfigLoadError::Parse { origin, .. } => {
            assert_eq!(origin, "SHOWROOM_CONFIG_TOML");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn guard_rails_reject_unknown_category() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ConfigLoader::new()
        .with_search_dir(dir.path())
        .load_with(env(&[(
            "SHOWROOM_CONFIG_TOML",
            "[products]\ninitial_category = \"plumbing\"\n",
        )]))
        .expect_err("guard rail");
    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn fast_cadence_loads_with_warnings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loaded = ConfigLoader::new()
        .with_search_dir(dir.path())
        .load_with(env(&[(
            "SHOWROOM_CONFIG_TOML",
            "[testimonials]\ninterval = \"1s\"\n",
        )]))
        .expect("load");
    assert_eq!(loaded.warnings.len(), 1);
}

#[test]
fn missing_env_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let env_file = dir.path().join("missing.env");
    let err = ConfigLoader::new()
        .with_search_dir(dir.path())
        .with_env_file(Some(env_file))
        .load()
        .expect_err("missing env file");
    assert!(matches!(err, ConfigLoadError::EnvFile(_)));
}
