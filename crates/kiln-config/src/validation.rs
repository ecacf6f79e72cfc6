//! Pluggable descriptor validation strategies
//!
//! Schema validation only looks at the descriptor itself. Filesystem checks
//! (entry and alias targets) belong to the resolver, which knows the project
//! root.

use std::collections::HashSet;
use std::path::{Component, Path};

use crate::descriptor::LibraryDescriptor;
use crate::error::{ConfigError, Result};
use crate::identifier::{identifier_hint, is_global_path, is_identifier};
use crate::library::unknown_placeholders;

/// Trait for pluggable descriptor validation strategies
pub trait ConfigValidator {
    /// Validate a descriptor
    fn validate(&self, descriptor: &LibraryDescriptor) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{ConfigValidator, LibraryDescriptor, LibraryOptions, SchemaValidator};
///
/// let descriptor = LibraryDescriptor::new(LibraryOptions::new("src/index.js", "widgets"));
/// SchemaValidator.validate(&descriptor).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, descriptor: &LibraryDescriptor) -> Result<()> {
        validate_library(descriptor)?;
        validate_aliases(descriptor)?;
        validate_externals(descriptor)?;
        validate_plugins(descriptor)?;
        Ok(())
    }
}

fn validate_library(descriptor: &LibraryDescriptor) -> Result<()> {
    let library = &descriptor.library;

    if library.entry.trim().is_empty() {
        return Err(ConfigError::schema("library.entry", "entry path cannot be empty")
            .with_hint("Point `entry` at the library's main module, e.g. \"src/index.js\""));
    }

    if !is_identifier(&library.name) {
        return Err(ConfigError::schema(
            "library.name",
            format!("'{}' is not a valid identifier", library.name),
        )
        .with_hint(identifier_hint(&library.name)));
    }

    if library.formats.is_empty() {
        return Err(ConfigError::schema("library.formats", "at least one output format is required")
            .with_hint("Use any of \"es\", \"umd\", \"iife\""));
    }

    let mut seen = HashSet::new();
    for format in &library.formats {
        if !seen.insert(*format) {
            return Err(ConfigError::schema(
                "library.formats",
                format!("format '{}' is listed more than once", format),
            ));
        }
    }

    for template in library.file_name.templates() {
        validate_file_template(template)?;
    }

    if library.out_dir.as_os_str().is_empty() {
        return Err(ConfigError::schema("library.out_dir", "output directory cannot be empty"));
    }

    Ok(())
}

fn validate_file_template(template: &str) -> Result<()> {
    if template.trim().is_empty() {
        return Err(ConfigError::schema("library.file_name", "file name template cannot be empty"));
    }

    if let Some(token) = unknown_placeholders(template).into_iter().next() {
        return Err(ConfigError::schema(
            "library.file_name",
            format!("unknown placeholder {} in '{}'", token, template),
        )
        .with_hint("Only [name] and [format] are supported"));
    }

    let path = Path::new(template);
    if path.is_absolute() || path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ConfigError::schema(
            "library.file_name",
            format!("'{}' must stay inside the output directory", template),
        ));
    }

    Ok(())
}

fn validate_aliases(descriptor: &LibraryDescriptor) -> Result<()> {
    for (key, target) in &descriptor.resolve.alias {
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(ConfigError::schema(
                "resolve.alias",
                format!("alias key '{}' must be non-empty and contain no whitespace", key),
            ));
        }

        if key.ends_with('/') {
            return Err(ConfigError::schema(
                "resolve.alias",
                format!("alias key '{}' must not end with '/'", key),
            )
            .with_hint(format!("Use \"{}\" instead", key.trim_end_matches('/'))));
        }

        if target.as_os_str().is_empty() {
            return Err(ConfigError::schema(
                "resolve.alias",
                format!("alias '{}' has an empty target path", key),
            ));
        }
    }

    Ok(())
}

fn validate_externals(descriptor: &LibraryDescriptor) -> Result<()> {
    let mut seen = HashSet::new();
    for external in &descriptor.external {
        if external.trim().is_empty() {
            return Err(ConfigError::schema("external", "external package names cannot be empty")
                .with_hint("Remove empty strings from the 'external' array"));
        }
        if !seen.insert(external.as_str()) {
            return Err(ConfigError::schema(
                "external",
                format!("'{}' is listed more than once", external),
            ));
        }
    }

    for (package, global) in &descriptor.globals {
        if !seen.contains(package.as_str()) {
            return Err(ConfigError::schema(
                "globals",
                format!("'{}' has a global binding but is not external", package),
            )
            .with_hint(format!("Add \"{}\" to the 'external' array", package)));
        }
        if !is_global_path(global) {
            return Err(ConfigError::schema(
                "globals",
                format!("'{}' is not a valid global name for '{}'", global, package),
            ));
        }
    }

    for package in &descriptor.resolve.dedupe {
        if !seen.contains(package.as_str()) {
            return Err(ConfigError::schema(
                "resolve.dedupe",
                format!("'{}' is deduplicated but is not external", package),
            )
            .with_hint(format!("Add \"{}\" to the 'external' array", package)));
        }
    }

    Ok(())
}

fn validate_plugins(descriptor: &LibraryDescriptor) -> Result<()> {
    let mut names = HashSet::new();
    for plugin in &descriptor.plugins {
        if plugin.name.trim().is_empty() {
            return Err(ConfigError::schema("plugins", "plugin name cannot be empty"));
        }

        if !names.insert(plugin.name.as_str()) {
            return Err(ConfigError::schema(
                "plugins",
                format!("plugin '{}' is declared more than once", plugin.name),
            ));
        }

        if plugin.order < -1000 || plugin.order > 1000 {
            return Err(ConfigError::schema(
                "plugins",
                format!(
                    "plugin order {} is out of reasonable range (-1000 to 1000)",
                    plugin.order
                ),
            )
            .with_hint("Use an order value between -1000 and 1000"));
        }
    }

    Ok(())
}

/// Convenience function for schema-only validation
///
/// # Example
///
/// ```
/// use kiln_config::{validate_schema, LibraryDescriptor, LibraryOptions};
///
/// let descriptor = LibraryDescriptor::new(LibraryOptions::new("src/index.js", "widgets"));
/// validate_schema(&descriptor).unwrap();
/// ```
pub fn validate_schema(descriptor: &LibraryDescriptor) -> Result<()> {
    SchemaValidator.validate(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LibraryOptions, OutputFormat, PluginOptions, ResolveOptions};

    fn valid() -> LibraryDescriptor {
        LibraryDescriptor::new(LibraryOptions::new("src/index.js", "widgets"))
    }

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::SchemaValidation { field, .. } => field,
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn accepts_minimal_descriptor() {
        assert!(validate_schema(&valid()).is_ok());
    }

    #[test]
    fn rejects_empty_entry() {
        let mut descriptor = valid();
        descriptor.library.entry = "  ".to_string();
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "library.entry");
    }

    #[test]
    fn rejects_non_identifier_name() {
        let mut descriptor = valid();
        descriptor.library.name = "my-widgets".to_string();
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "library.name");
    }

    #[test]
    fn rejects_reserved_words_as_names() {
        let mut descriptor = valid();
        descriptor.library.name = "class".to_string();
        match validate_schema(&descriptor).unwrap_err() {
            ConfigError::SchemaValidation { field, hint, .. } => {
                assert_eq!(field, "library.name");
                assert!(hint.unwrap_or_default().contains("reserved word"));
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_and_duplicate_formats() {
        let mut descriptor = valid();
        descriptor.library.formats.clear();
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "library.formats");

        descriptor.library.formats = vec![OutputFormat::Es, OutputFormat::Es];
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "library.formats");
    }

    #[test]
    fn rejects_unknown_placeholder_and_escaping_template() {
        let mut descriptor = valid();
        descriptor.library.file_name = crate::FileNaming::Pattern("[name].[hash].js".into());
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "library.file_name");

        descriptor.library.file_name = crate::FileNaming::Pattern("../[name].js".into());
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "library.file_name");
    }

    #[test]
    fn rejects_alias_with_trailing_slash() {
        let descriptor = valid().with_resolve(ResolveOptions::default().with_alias("@/", "./src"));
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "resolve.alias");
    }

    #[test]
    fn rejects_globals_for_non_external_package() {
        let mut descriptor = valid();
        descriptor.globals.insert("vue".into(), "Vue".into());
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "globals");
    }

    #[test]
    fn rejects_invalid_global_name() {
        let descriptor = valid().with_external("vue", Some("not-valid"));
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "globals");
    }

    #[test]
    fn rejects_dedupe_outside_external() {
        let descriptor = valid().with_resolve(ResolveOptions::default().with_dedupe("vue"));
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "resolve.dedupe");

        let descriptor = valid()
            .with_external("vue", Some("Vue"))
            .with_resolve(ResolveOptions::default().with_dedupe("vue"));
        assert!(validate_schema(&descriptor).is_ok());
    }

    #[test]
    fn rejects_duplicate_and_out_of_range_plugins() {
        let descriptor = valid()
            .with_plugin(PluginOptions::named("vue"))
            .with_plugin(PluginOptions::named("vue"));
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "plugins");

        let descriptor = valid().with_plugin(PluginOptions::named("vue").with_order(9999));
        assert_eq!(field_of(validate_schema(&descriptor).unwrap_err()), "plugins");
    }
}
