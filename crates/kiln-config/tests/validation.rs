//! Tests for descriptor schema validation.

use kiln_config::{
    ConfigError, ConfigValidator, FileNaming, LibraryDescriptor, LibraryOptions, OutputFormat,
    PerFormatNames, SchemaValidator,
};
use serde_json::json;

fn widgets() -> LibraryDescriptor {
    LibraryDescriptor::from_value(json!({
        "library": {
            "entry": "src/index.js",
            "name": "nzhswidgets",
            "formats": ["es", "umd", "iife"]
        },
        "resolve": { "alias": { "@": "./src" }, "dedupe": ["vue"] },
        "external": ["vue"],
        "globals": { "vue": "Vue" },
        "plugins": [{ "name": "vue" }, { "name": "vue-devtools" }]
    }))
    .expect("descriptor")
}

#[test]
fn widget_descriptor_is_valid() {
    assert!(SchemaValidator.validate(&widgets()).is_ok());
}

#[test]
fn missing_globals_are_not_a_schema_error() {
    // Global bindings are checked per format by the resolver.
    let mut descriptor = widgets();
    descriptor.globals.clear();
    assert!(SchemaValidator.validate(&descriptor).is_ok());
}

#[test]
fn per_format_templates_are_each_checked() {
    let mut descriptor = widgets();
    descriptor.library.file_name = FileNaming::PerFormat(PerFormatNames {
        pattern: "[name].[format].js".to_string(),
        es: None,
        umd: Some("/abs/[name].js".to_string()),
        iife: None,
    });

    let err = SchemaValidator.validate(&descriptor).unwrap_err();
    match err {
        ConfigError::SchemaValidation { field, message, .. } => {
            assert_eq!(field, "library.file_name");
            assert!(message.contains("/abs/[name].js"));
        }
        other => panic!("expected SchemaValidation, got {other:?}"),
    }
}

#[test]
fn empty_external_name_is_rejected() {
    let mut descriptor = widgets();
    descriptor.external.push("   ".to_string());
    let err = SchemaValidator.validate(&descriptor).unwrap_err();
    assert!(matches!(err, ConfigError::SchemaValidation { field, .. } if field == "external"));
}

#[test]
fn dotted_global_names_are_allowed() {
    let descriptor = LibraryDescriptor::new(
        LibraryOptions::new("src/index.js", "widgets").with_formats([OutputFormat::Umd]),
    )
    .with_external("@vue/runtime-core", Some("Vue.Runtime"));
    assert!(SchemaValidator.validate(&descriptor).is_ok());
}

#[test]
fn error_message_carries_hint() {
    let mut descriptor = widgets();
    descriptor.library.name = "nzhs-widgets".to_string();
    let msg = SchemaValidator.validate(&descriptor).unwrap_err().to_string();
    assert!(msg.contains("library.name"));
    assert!(msg.contains("invalid character '-'"));
}
