//! Tests for descriptor profiles and merging behavior.

use kiln_config::{ConfigDiscovery, ConfigError, OutputFormat};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const WIDGETS: &str = r#"
external = ["vue"]

[library]
entry = "src/index.js"
name = "nzhswidgets"
formats = ["es", "umd", "iife"]

[globals]
vue = "Vue"

[[plugins]]
name = "vue"

[[plugins]]
name = "vue-devtools"
order = 10

[plugins.profiles.production]
enabled = false

[profiles.production.library]
out_dir = "dist/prod"
formats = ["es"]

[profiles.debug.settings]
log_level = "trace"
"#;

fn write_widgets() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("kiln.toml"), WIDGETS).expect("write config");
    dir
}

#[test]
fn profile_overrides_library_options() {
    let dir = write_widgets();

    let descriptor = ConfigDiscovery::new(dir.path())
        .load_with_profile("production")
        .expect("load with profile");

    assert_eq!(descriptor.library.out_dir, PathBuf::from("dist/prod"));
    assert_eq!(descriptor.library.formats, vec![OutputFormat::Es]);
    // untouched keys survive the merge
    assert_eq!(descriptor.library.name, "nzhswidgets");
    assert_eq!(descriptor.global_for("vue"), Some("Vue"));
}

#[test]
fn profile_overrides_settings() {
    let dir = write_widgets();

    let descriptor = ConfigDiscovery::new(dir.path())
        .load_with_profile("debug")
        .expect("load with profile");

    assert_eq!(descriptor.settings.log_level.as_deref(), Some("trace"));
    assert_eq!(descriptor.library.formats.len(), 3);
}

#[test]
fn plugin_profiles_apply_per_plugin() {
    let dir = write_widgets();

    let descriptor = ConfigDiscovery::new(dir.path())
        .load_with_profile("production")
        .expect("load with profile");

    let devtools = descriptor
        .plugins
        .iter()
        .find(|p| p.name == "vue-devtools")
        .expect("devtools plugin");
    assert!(!devtools.enabled);
    assert_eq!(devtools.order, 10);
    assert!(devtools.profiles.contains_key("production"));

    let vue = descriptor.plugins.iter().find(|p| p.name == "vue").expect("vue plugin");
    assert!(vue.enabled);
}

#[test]
fn profiles_are_kept_after_materializing() {
    let dir = write_widgets();

    let descriptor = ConfigDiscovery::new(dir.path())
        .load_with_profile("production")
        .expect("load with profile");

    assert_eq!(descriptor.profile_names(), vec!["debug", "production"]);
}

#[test]
fn unknown_profile_is_an_error() {
    let dir = write_widgets();

    let err = ConfigDiscovery::new(dir.path())
        .load_with_profile("staging")
        .unwrap_err();
    assert!(matches!(err, ConfigError::ProfileNotFound(name) if name == "staging"));
}

#[test]
fn profile_with_wrong_type_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("kiln.toml"),
        r#"
[library]
entry = "src/index.js"
name = "w"

[profiles.broken.library]
formats = "es"
"#,
    )
    .expect("write config");

    let err = ConfigDiscovery::new(dir.path())
        .load_with_profile("broken")
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidProfileOverride { .. }));
}
