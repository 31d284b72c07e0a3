use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::FileMapping;
use crate::dispatcher::WriteOptions;
use crate::error::{ManifestSemverError, Result};
use crate::hooks::{EventKind, EventNotifier, HookScriptListener};
use crate::manifest::DEFAULT_INDENT;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "semver.toml";

/// Represents the complete configuration for manifest-semver.
///
/// Contains write options, the manifests to process and event hook scripts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub files: Vec<FilesConfig>,

    #[serde(default)]
    pub hooks: HooksConfig,
}

/// Returns the default indentation unit.
fn default_indent() -> String {
    DEFAULT_INDENT.to_string()
}

/// Options applied when writing manifests.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OptionsConfig {
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        OptionsConfig {
            indent: default_indent(),
        }
    }
}

/// One `[[files]]` entry: source patterns and an optional destination.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    pub src: Vec<String>,

    #[serde(default)]
    pub dest: Option<PathBuf>,
}

/// Scripts run after each successful item, per event kind.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct HooksConfig {
    #[serde(default)]
    pub validate: Option<PathBuf>,

    #[serde(default)]
    pub set: Option<PathBuf>,

    #[serde(default)]
    pub bump: Option<PathBuf>,
}

impl Config {
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            indent: self.options.indent.clone(),
        }
    }

    /// Expand every `[[files]]` entry into a mapping.
    ///
    /// Patterns are resolved relative to `base`. A pattern that matches
    /// nothing is kept as a literal path so the missing file is reported
    /// per item instead of silently dropped.
    pub fn file_mappings(&self, base: &Path) -> Result<Vec<FileMapping>> {
        self.files
            .iter()
            .map(|entry| {
                let mut sources = Vec::new();
                for pattern in &entry.src {
                    sources.extend(expand_pattern(base, pattern)?);
                }
                let destination = entry.dest.as_ref().map(|d| base.join(d));
                Ok(FileMapping::new(sources, destination))
            })
            .collect()
    }

    /// Build a notifier with one script listener per configured hook
    pub fn notifier(&self, base: &Path) -> EventNotifier {
        let mut notifier = EventNotifier::new();
        let hooks = [
            (EventKind::Validate, &self.hooks.validate),
            (EventKind::Set, &self.hooks.set),
            (EventKind::Bump, &self.hooks.bump),
        ];
        for (kind, script) in hooks {
            if let Some(script) = script {
                notifier.subscribe(HookScriptListener::new(kind, base.join(script)));
            }
        }
        notifier
    }
}

fn expand_pattern(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = base.join(pattern);
    let full_str = full.to_string_lossy();

    let entries = glob::glob(&full_str)
        .map_err(|e| ManifestSemverError::config(format!("Invalid pattern '{}': {}", pattern, e)))?;

    let mut matched: Vec<PathBuf> = entries.filter_map(|entry| entry.ok()).collect();
    if matched.is_empty() {
        matched.push(full);
    }
    Ok(matched)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver.toml` in current directory
/// 3. `<config dir>/manifest-semver/config.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join("manifest-semver").join("config.toml");
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ManifestSemverError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    toml::from_str(&config_str)
        .map_err(|e| ManifestSemverError::config(format!("Cannot parse {}: {}", path.display(), e)))
}
