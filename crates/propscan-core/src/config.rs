/// Layered configuration: built-in defaults, an optional JSON file, then
/// environment overrides.
///
/// ```text
/// defaults  <  $PROPSCAN_CONFIG (JSON)  <  $PROPSCAN_SVN
/// ```
use crate::error::{Result, ScanError};
use crate::scanner::ExclusionRules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "PROPSCAN_CONFIG";

/// Environment variable overriding the property-query command.
pub const SVN_ENV: &str = "PROPSCAN_SVN";

/// Command used for property queries when nothing overrides it.
pub const DEFAULT_SVN_COMMAND: &str = "svn";

/// Runtime configuration shared by all three tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program invoked as `<svn_command> propget <name> <path>`.
    pub svn_command: String,
    /// Entries skipped during every scan.
    pub exclusions: ExclusionRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            svn_command: DEFAULT_SVN_COMMAND.to_string(),
            exclusions: ExclusionRules::default(),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let config = Self::resolve(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var(SVN_ENV).ok(),
        )?;
        tracing::debug!("Effective configuration: {}", config.to_json());
        Ok(config)
    }

    /// The configuration in the same JSON shape `from_json_file` reads.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }

    /// Apply the file and command overrides on top of the defaults.
    ///
    /// An empty `svn_override` is ignored.
    pub fn resolve(config_file: Option<PathBuf>, svn_override: Option<String>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_json_file(&path)?,
            None => Self::default(),
        };

        if let Some(command) = svn_override.filter(|c| !c.trim().is_empty()) {
            tracing::debug!("Property command overridden by {SVN_ENV}: {command}");
            config.svn_command = command;
        }

        Ok(config)
    }

    /// Load a JSON configuration file. Fields absent from the file keep
    /// their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ScanError::io("cannot read configuration", path, e))?;
        let config = serde_json::from_str(&text).map_err(|source| ScanError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_use_svn_and_standard_exclusions() {
        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config.svn_command, "svn");
        assert_eq!(config.exclusions, ExclusionRules::default());
    }

    #[test]
    fn svn_override_wins_over_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("propscan.json");
        fs::write(&path, r#"{ "svn_command": "/opt/svn/bin/svn" }"#).unwrap();

        let from_file = Config::resolve(Some(path.clone()), None).unwrap();
        assert_eq!(from_file.svn_command, "/opt/svn/bin/svn");

        let overridden = Config::resolve(Some(path), Some("svn-1.14".into())).unwrap();
        assert_eq!(overridden.svn_command, "svn-1.14");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = Config::resolve(None, Some("  ".into())).unwrap();
        assert_eq!(config.svn_command, DEFAULT_SVN_COMMAND);
    }

    #[test]
    fn partial_exclusions_keep_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("propscan.json");
        fs::write(&path, r#"{ "exclusions": { "names": ["build"] } }"#).unwrap();

        let config = Config::from_json_file(&path).unwrap();
        assert_eq!(config.exclusions.names, vec!["build".to_string()]);
        assert_eq!(
            config.exclusions.prefixes,
            ExclusionRules::default().prefixes
        );
        assert_eq!(config.svn_command, DEFAULT_SVN_COMMAND);
    }

    #[test]
    fn effective_config_dump_can_be_loaded_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dump.json");
        let config = Config::resolve(None, Some("/usr/local/bin/svn".into())).unwrap();

        let dump = config.to_json();
        assert!(dump.contains("\"svn_command\":\"/usr/local/bin/svn\""), "{dump}");
        assert!(dump.contains("include/coin"), "{dump}");

        fs::write(&path, dump).unwrap();
        assert_eq!(Config::from_json_file(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ScanError::Config { .. }), "got {err:?}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = Config::from_json_file(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }), "got {err:?}");
    }
}
