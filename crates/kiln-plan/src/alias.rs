//! Path alias resolution.
//!
//! Declared aliases are resolved eagerly: every target becomes an absolute,
//! normalized path the moment the map is built. Specifiers are then matched
//! by their longest registered prefix.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::Serialize;

use crate::error::{ResolveError, Result};

/// Leading characters that mark a specifier as alias-based.
///
/// A specifier whose first segment starts with one of these must match a
/// registered alias; it is never treated as a plain relative path.
pub const ALIAS_SIGILS: [char; 4] = ['@', '#', '~', '$'];

/// Registered aliases with absolute targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasMap {
    entries: BTreeMap<String, PathBuf>,
}

impl AliasMap {
    /// Resolve every declared target against `root`.
    ///
    /// Relative targets (`./src`) are joined onto the root; absolute targets
    /// are kept. Both are normalized.
    pub fn new(root: &Path, declared: &BTreeMap<String, PathBuf>) -> Self {
        let entries = declared
            .iter()
            .map(|(key, target)| {
                let absolute = absolutize(root, target);
                tracing::debug!(alias = %key, target = %absolute.display(), "resolved alias");
                (key.clone(), absolute)
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Path> {
        self.entries.get(key).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(key, target)| (key.as_str(), target.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fail on the first alias whose target does not exist.
    pub fn check_targets(&self) -> Result<()> {
        for (alias, target) in &self.entries {
            if !target.exists() {
                return Err(ResolveError::AliasTargetNotFound {
                    alias: alias.clone(),
                    path: target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Longest alias matching `specifier`, with the remainder after it.
    ///
    /// A key matches when the specifier equals it or continues with `/`.
    pub fn lookup<'a>(&self, specifier: &'a str) -> Option<(&str, &Path, &'a str)> {
        self.entries
            .iter()
            .filter(|(key, _)| {
                specifier
                    .strip_prefix(key.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
            .max_by_key(|(key, _)| key.len())
            .map(|(key, target)| {
                let rest = specifier[key.len()..].trim_start_matches('/');
                (key.as_str(), target.as_path(), rest)
            })
    }

    /// Resolve a module specifier to an absolute path.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use std::path::{Path, PathBuf};
    /// use kiln_plan::AliasMap;
    ///
    /// let declared = BTreeMap::from([("@".to_string(), PathBuf::from("/project/src"))]);
    /// let aliases = AliasMap::new(Path::new("/project"), &declared);
    ///
    /// let entry = aliases.resolve("@/index.js", Path::new("/project")).unwrap();
    /// assert_eq!(entry, PathBuf::from("/project/src/index.js"));
    /// assert!(aliases.resolve("#/x", Path::new("/project")).is_err());
    /// ```
    pub fn resolve(&self, specifier: &str, root: &Path) -> Result<PathBuf> {
        if let Some((_, target, rest)) = self.lookup(specifier) {
            let resolved = if rest.is_empty() {
                target.to_path_buf()
            } else {
                target.join(rest).clean()
            };
            return Ok(resolved);
        }

        let prefix = specifier.split('/').next().unwrap_or(specifier);
        if prefix.starts_with(ALIAS_SIGILS) {
            return Err(ResolveError::UnresolvedAlias {
                specifier: specifier.to_string(),
                prefix: prefix.to_string(),
            });
        }

        Ok(absolutize(root, Path::new(specifier)))
    }
}

fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        root.join(path).clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases(pairs: &[(&str, &str)]) -> AliasMap {
        let declared = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), PathBuf::from(v)))
            .collect();
        AliasMap::new(Path::new("/project"), &declared)
    }

    #[test]
    fn relative_targets_join_root() {
        let map = aliases(&[("@", "./src")]);
        assert_eq!(map.get("@"), Some(Path::new("/project/src")));
    }

    #[test]
    fn longest_prefix_wins() {
        let map = aliases(&[("@", "./src"), ("@components", "./src/ui/components")]);
        let root = Path::new("/project");

        assert_eq!(
            map.resolve("@components/Button.vue", root).unwrap(),
            PathBuf::from("/project/src/ui/components/Button.vue")
        );
        assert_eq!(
            map.resolve("@/components/Button.vue", root).unwrap(),
            PathBuf::from("/project/src/components/Button.vue")
        );
    }

    #[test]
    fn key_must_end_at_segment_boundary() {
        let map = aliases(&[("@ui", "./src/ui")]);
        let err = map.resolve("@uikit/x.js", Path::new("/project")).unwrap_err();
        assert!(
            matches!(err, ResolveError::UnresolvedAlias { prefix, .. } if prefix == "@uikit")
        );
    }

    #[test]
    fn bare_alias_resolves_to_target() {
        let map = aliases(&[("~", "/shared")]);
        assert_eq!(
            map.resolve("~", Path::new("/project")).unwrap(),
            PathBuf::from("/shared")
        );
    }

    #[test]
    fn plain_paths_resolve_against_root() {
        let map = AliasMap::default();
        let root = Path::new("/project");
        assert_eq!(
            map.resolve("src/index.js", root).unwrap(),
            PathBuf::from("/project/src/index.js")
        );
        assert_eq!(
            map.resolve("./lib/../src/index.js", root).unwrap(),
            PathBuf::from("/project/src/index.js")
        );
        assert_eq!(
            map.resolve("/abs/index.js", root).unwrap(),
            PathBuf::from("/abs/index.js")
        );
    }

    #[test]
    fn unknown_sigil_prefix_is_unresolved() {
        let map = aliases(&[("@", "./src")]);
        let err = map.resolve("#/x", Path::new("/project")).unwrap_err();
        match err {
            ResolveError::UnresolvedAlias { specifier, prefix } => {
                assert_eq!(specifier, "#/x");
                assert_eq!(prefix, "#");
            }
            other => panic!("expected UnresolvedAlias, got {other:?}"),
        }
    }

    #[test]
    fn check_targets_reports_missing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        let declared = BTreeMap::from([
            ("@".to_string(), PathBuf::from("./src")),
            ("@lib".to_string(), PathBuf::from("./lib")),
        ]);
        let map = AliasMap::new(dir.path(), &declared);

        let err = map.check_targets().unwrap_err();
        assert!(matches!(err, ResolveError::AliasTargetNotFound { alias, .. } if alias == "@lib"));
    }
}
