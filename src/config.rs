//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.questbundle.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".questbundle.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Quest source settings.
    #[serde(default)]
    pub quests: QuestsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Where quests are read from and how the tree is walked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestsConfig {
    /// Root directory searched for quest files.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Visit entries in file-name order instead of filesystem order.
    #[serde(default)]
    pub sort_entries: bool,

    /// Follow symbolic links while walking.
    #[serde(default = "default_true")]
    pub follow_links: bool,
}

impl Default for QuestsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            sort_entries: false,
            follow_links: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("quests")
}

fn default_true() -> bool {
    true
}

/// Where the bundle is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, created if missing.
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    /// Bundle file name inside the output directory.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            file_name: default_file_name(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

fn default_file_name() -> String {
    "quests.json".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from `path`.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Ok(Some(Self::load(path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were given explicitly.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref root) = args.root {
            self.quests.root = root.clone();
        }
        if let Some(ref output) = args.output {
            self.output.directory = output.clone();
        }
        if args.sorted {
            self.quests.sort_entries = true;
        }
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Full path of the bundle file.
    pub fn output_file(&self) -> PathBuf {
        self.output.directory.join(&self.output.file_name)
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::make_args;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.quests.root, PathBuf::from("quests"));
        assert_eq!(config.output.directory, PathBuf::from("./output"));
        assert_eq!(config.output_file(), PathBuf::from("./output").join("quests.json"));
        assert!(config.quests.follow_links);
        assert!(!config.quests.sort_entries);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[quests]
root = "data/quests"
sort_entries = true

[output]
directory = "dist"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.quests.root, PathBuf::from("data/quests"));
        assert!(config.quests.sort_entries);
        assert!(config.quests.follow_links);
        assert_eq!(config.output.directory, PathBuf::from("dist"));
        assert_eq!(config.output.file_name, "quests.json");
    }

    #[test]
    fn test_merge_only_explicit_args() {
        let mut config: Config = toml::from_str("[output]\ndirectory = \"dist\"\n").unwrap();
        let mut args = make_args();
        config.merge_with_args(&args);
        assert_eq!(config.output.directory, PathBuf::from("dist"));

        args.output = Some(PathBuf::from("build"));
        args.root = Some(PathBuf::from("other"));
        args.sorted = true;
        config.merge_with_args(&args);
        assert_eq!(config.output.directory, PathBuf::from("build"));
        assert_eq!(config.quests.root, PathBuf::from("other"));
        assert!(config.quests.sort_entries);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[quests]"));
        assert!(toml_str.contains("[output]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.output.file_name, "quests.json");
    }
}
