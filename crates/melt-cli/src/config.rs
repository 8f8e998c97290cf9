//! CLI configuration, parsed from an optional TOML file plus environment
//! variable overrides.
//!
//! Priority: command-line flags > environment variables > config file > defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeltConfig {
    /// Defaults for backup and restore
    #[serde(default)]
    pub defaults: DefaultsSection,

    /// Logging
    #[serde(default)]
    pub log: LogSection,
}

/// Defaults for backup and restore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsSection {
    /// Seed phrase language, as a tag ("en", "zh-Hant") or a name ("japanese")
    #[serde(default = "default_language")]
    pub language: String,

    /// Comment written into restored public keys
    #[serde(default)]
    pub comment: String,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            language: default_language(),
            comment: String::new(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSection {
    /// Log level (off, error, warn, info, debug, trace). `RUST_LOG` wins over it.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_language() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// `$XDG_CONFIG_HOME/melt/config.toml`, falling back to `~/.config`.
pub fn default_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("melt").join("config.toml"))
}

// ============================================================================
// Loading & environment override
// ============================================================================

impl MeltConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: MeltConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// The file to load: `path` if given, else the default location when a
    /// file exists there.
    pub fn locate(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(path.to_path_buf()),
            None => default_path().filter(|path| path.is_file()),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `MELT_LANGUAGE`
    /// - `MELT_COMMENT`
    /// - `MELT_LOG_LEVEL`
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("MELT_LANGUAGE") {
            self.defaults.language = v;
        }
        if let Some(v) = var("MELT_COMMENT") {
            self.defaults.comment = v;
        }
        if let Some(v) = var("MELT_LOG_LEVEL") {
            self.log.level = v;
        }
    }

    /// Apply command-line flags. Call before `validate`, so a flag can
    /// replace a bad file or env value.
    pub fn apply_flags(&mut self, language: Option<String>) {
        if let Some(language) = language {
            self.defaults.language = language;
        }
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        melt_core::resolve(&self.defaults.language).with_context(|| {
            format!(
                "defaults.language {:?} is not a supported language",
                self.defaults.language
            )
        })?;

        anyhow::ensure!(
            self.log.level.parse::<log::LevelFilter>().is_ok(),
            "log.level must be one of off, error, warn, info, debug, trace"
        );

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
