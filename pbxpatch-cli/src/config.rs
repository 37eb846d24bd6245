//! Configuration file loading for pbxpatch.
//!
//! Discovers and loads `pbxpatch.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use pbxpatch_edit::MissingAnchor;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "pbxpatch.toml";

/// Anchor-miss policy as it appears in config and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OnMissingAnchor {
    /// Abort before writing if any step misses (hardened default).
    Fail,
    /// Apply whatever matched; report the misses. Compatibility mode.
    Skip,
}

impl From<OnMissingAnchor> for MissingAnchor {
    fn from(v: OnMissingAnchor) -> Self {
        match v {
            OnMissingAnchor::Fail => MissingAnchor::Fail,
            OnMissingAnchor::Skip => MissingAnchor::Skip,
        }
    }
}

/// Top-level configuration from pbxpatch.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PbxpatchConfig {
    /// Policy settings.
    pub policy: PolicyConfig,

    /// Backup settings.
    pub backups: BackupsConfig,
}

/// Policy section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// What to do when a step's anchor is absent.
    pub on_missing_anchor: Option<OnMissingAnchor>,
}

/// Backups section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupsConfig {
    /// Whether to copy the original aside before writing.
    pub enabled: bool,

    /// Suffix for backup files.
    pub suffix: String,
}

impl Default for BackupsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            suffix: ".pbxpatch.bak".to_string(),
        }
    }
}

/// Discover the pbxpatch.toml config file in `dir`.
///
/// Returns `None` if no config file is found.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a pbxpatch.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<PbxpatchConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<PbxpatchConfig> {
    let config: PbxpatchConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<PbxpatchConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(PbxpatchConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub on_missing_anchor: OnMissingAnchor,
    pub backup_enabled: bool,
    pub backup_suffix: String,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: PbxpatchConfig,
}

impl ConfigMerger {
    pub fn new(config: PbxpatchConfig) -> Self {
        Self { config }
    }

    /// Merge with CLI arguments; flags given on the command line win.
    pub fn merge_args(
        self,
        cli_on_missing: Option<OnMissingAnchor>,
        cli_no_backup: bool,
        cli_backup_suffix: Option<String>,
    ) -> MergedConfig {
        let on_missing_anchor = cli_on_missing
            .or(self.config.policy.on_missing_anchor)
            .unwrap_or(OnMissingAnchor::Fail);

        let backup_enabled = if cli_no_backup {
            false
        } else {
            self.config.backups.enabled
        };

        let backup_suffix = cli_backup_suffix.unwrap_or(self.config.backups.suffix);

        MergedConfig {
            on_missing_anchor,
            backup_enabled,
            backup_suffix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.policy.on_missing_anchor, None);
        assert!(config.backups.enabled);
        assert_eq!(config.backups.suffix, ".pbxpatch.bak");
    }

    #[test]
    fn config_file_sets_skip_mode() {
        let config = parse_config(
            r#"
[policy]
on_missing_anchor = "skip"

[backups]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(config.policy.on_missing_anchor, Some(OnMissingAnchor::Skip));
        assert!(!config.backups.enabled);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config("[policy").is_err());
    }

    #[test]
    fn cli_flags_override_config_file() {
        let config = parse_config(
            r#"
[policy]
on_missing_anchor = "skip"

[backups]
suffix = ".orig"
"#,
        )
        .unwrap();

        let merged = ConfigMerger::new(config).merge_args(
            Some(OnMissingAnchor::Fail),
            true,
            Some(".cli-suffix".to_string()),
        );
        assert_eq!(merged.on_missing_anchor, OnMissingAnchor::Fail);
        assert!(!merged.backup_enabled);
        assert_eq!(merged.backup_suffix, ".cli-suffix");
    }

    #[test]
    fn merge_without_cli_flags_uses_file_then_defaults() {
        let merged = ConfigMerger::new(PbxpatchConfig::default()).merge_args(None, false, None);
        assert_eq!(merged.on_missing_anchor, OnMissingAnchor::Fail);
        assert!(merged.backup_enabled);
        assert_eq!(merged.backup_suffix, ".pbxpatch.bak");
    }
}
