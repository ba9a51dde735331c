/// Name- and path-based exclusion rules applied during every scan.
///
/// An excluded directory is pruned before the walker reads it, so nothing
/// beneath it is ever visited.
use super::normalize;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Immutable set of exclusion rules passed into [`super::scan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionRules {
    /// Entry names starting with any of these are skipped (hidden files,
    /// `_`-prefixed build and example directories).
    pub prefixes: Vec<String>,
    /// Entry names that are skipped when matched exactly.
    pub names: Vec<String>,
    /// Normalized paths that are skipped when matched exactly.
    pub paths: Vec<PathBuf>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            prefixes: vec![".".into(), "_".into()],
            names: vec!["Debug".into(), "Release".into(), "html".into()],
            // Vendored third-party sources.
            paths: vec![PathBuf::from("include/coin"), PathBuf::from("src/coin")],
        }
    }
}

impl ExclusionRules {
    /// Rules that exclude nothing.
    pub fn none() -> Self {
        Self {
            prefixes: Vec::new(),
            names: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// The same name rules without the literal path exclusions.
    pub fn names_only(&self) -> Self {
        Self {
            paths: Vec::new(),
            ..self.clone()
        }
    }

    /// `true` if an entry called `name` must be skipped.
    pub fn excludes_name(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && name.starts_with(prefix.as_str()))
            || self.names.iter().any(|n| n.as_str() == name)
    }

    /// `true` if the normalized `path` is one of the literal excluded paths.
    pub fn excludes_path(&self, path: &Path) -> bool {
        self.paths.iter().any(|excluded| normalize(excluded) == path)
    }

    /// Combined check used by the walker.
    pub fn excludes(&self, name: &OsStr, normalized_path: &Path) -> bool {
        self.excludes_name(name) || self.excludes_path(normalized_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_skip_hidden_underscore_and_build_dirs() {
        let rules = ExclusionRules::default();
        for name in [".svn", ".hidden.cpp", "_release", "_examples", "Debug", "Release", "html"] {
            assert!(rules.excludes_name(OsStr::new(name)), "{name} should be excluded");
        }
    }

    #[test]
    fn default_rules_keep_ordinary_names() {
        let rules = ExclusionRules::default();
        for name in ["src", "a.cpp", "debug", "Debugger", "html5", "my_file.h"] {
            assert!(!rules.excludes_name(OsStr::new(name)), "{name} should be kept");
        }
    }

    #[test]
    fn literal_paths_match_after_normalization() {
        let rules = ExclusionRules {
            paths: vec![PathBuf::from("./src/coin")],
            ..ExclusionRules::none()
        };
        assert!(rules.excludes_path(Path::new("src/coin")));
        assert!(!rules.excludes_path(Path::new("src/coin2")));
        assert!(!rules.excludes_path(Path::new("other/src/coin")));
    }

    #[test]
    fn names_only_keeps_name_rules_and_drops_paths() {
        let rules = ExclusionRules::default().names_only();
        assert!(rules.paths.is_empty());
        assert!(!rules.excludes_path(Path::new("src/coin")));
        assert!(rules.excludes_name(OsStr::new("Debug")));
        assert!(rules.excludes_name(OsStr::new(".svn")));
    }

    #[test]
    fn empty_prefix_never_matches() {
        let rules = ExclusionRules {
            prefixes: vec![String::new()],
            ..ExclusionRules::none()
        };
        assert!(!rules.excludes_name(OsStr::new("anything")));
    }
}
