#![cfg(test)]

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::Serialized;
use kiln_config::{LibraryDescriptor, LibraryOptions, OutputFormat};
use serde_json::json;
use tempfile::TempDir;

use crate::cli::{ConfigArgs, OverrideArgs};
use crate::config::{layer, load, locate};
use crate::error::CliError;

const WIDGETS: &str = r#"
external = ["vue"]

[library]
entry = "src/index.js"
name = "nzhswidgets"
formats = ["es", "umd", "iife"]

[globals]
vue = "Vue"

[profiles.production.library]
out_dir = "dist/prod"
"#;

fn widgets() -> LibraryDescriptor {
    LibraryDescriptor::new(LibraryOptions::new("src/index.js", "nzhswidgets"))
        .with_external("vue", Some("Vue"))
}

fn no_env() -> Serialized<serde_json::Value> {
    Serialized::defaults(json!({}))
}

#[test]
fn flags_override_base() {
    let overrides = OverrideArgs {
        name: Some("widgets".to_string()),
        formats: vec![OutputFormat::Iife],
        out_dir: Some(PathBuf::from("build")),
    };

    let descriptor = layer(widgets(), no_env(), &overrides).unwrap();
    assert_eq!(descriptor.library.name, "widgets");
    assert_eq!(descriptor.library.formats, vec![OutputFormat::Iife]);
    assert_eq!(descriptor.library.out_dir, PathBuf::from("build"));
    assert_eq!(descriptor.library.entry, "src/index.js");
    assert_eq!(descriptor.global_for("vue"), Some("Vue"));
}

#[test]
fn env_layer_sits_between_file_and_flags() {
    let env = Serialized::defaults(json!({
        "library": { "name": "fromenv", "out_dir": "envdist" }
    }));
    let overrides = OverrideArgs {
        name: Some("fromflag".to_string()),
        ..OverrideArgs::default()
    };

    let descriptor = layer(widgets(), env, &overrides).unwrap();
    assert_eq!(descriptor.library.name, "fromflag");
    assert_eq!(descriptor.library.out_dir, PathBuf::from("envdist"));
}

#[test]
fn empty_overrides_keep_descriptor() {
    let base = widgets();
    let descriptor = layer(base.clone(), no_env(), &OverrideArgs::default()).unwrap();
    assert_eq!(descriptor, base);
}

#[test]
fn bad_layer_value_is_reported() {
    let env = Serialized::defaults(json!({ "library": { "formats": ["cjs"] } }));
    let err = layer(widgets(), env, &OverrideArgs::default()).unwrap_err();
    assert!(matches!(err, CliError::Layering(_)));
}

#[test]
fn locate_prefers_explicit_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kiln.toml"), WIDGETS).unwrap();
    fs::write(dir.path().join("other.toml"), WIDGETS).unwrap();

    let found = locate(dir.path(), Some(Path::new("other.toml"))).unwrap();
    assert!(found.ends_with("other.toml"));

    let found = locate(dir.path(), None).unwrap();
    assert!(found.ends_with("kiln.toml"));
}

#[test]
fn locate_reports_missing_explicit_file() {
    let dir = TempDir::new().unwrap();
    let err = locate(dir.path(), Some(Path::new("missing.toml"))).unwrap_err();
    assert!(matches!(err, CliError::FileNotFound(_)));
}

#[test]
fn load_applies_profile() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kiln.toml"), WIDGETS).unwrap();

    let config = ConfigArgs {
        config: None,
        profile: Some("production".to_string()),
    };
    let loaded = load(dir.path(), &config, &OverrideArgs::default()).unwrap();

    assert_eq!(loaded.profile.as_deref(), Some("production"));
    assert_eq!(loaded.descriptor.library.out_dir, PathBuf::from("dist/prod"));
    assert_eq!(loaded.descriptor.library.formats.len(), 3);
}

#[test]
fn load_rejects_unknown_profile() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kiln.toml"), WIDGETS).unwrap();

    let config = ConfigArgs {
        config: None,
        profile: Some("staging".to_string()),
    };
    let err = load(dir.path(), &config, &OverrideArgs::default()).unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(kiln_config::ConfigError::ProfileNotFound(ref name)) if name == "staging"
    ));
}
