//! Configuration file support for order-lister.
//!
//! An optional `order-lister.config.yml` supplies defaults for the CLI
//! flags. Flags given on the command line always win.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "order-lister.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// JSON orders file
    pub source: Option<PathBuf>,
    /// Order service base URL
    pub url: Option<String>,
    pub output: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured format, already validated by [`load_config_from_path`]
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// One warning line per unknown top-level field
pub fn unknown_field_warnings(config: &ConfigFile) -> Vec<String> {
    config
        .unknown_fields
        .keys()
        .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
        .collect()
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.source.is_some() && config.url.is_some() {
        bail!(
            "Invalid config: 'source' and 'url' cannot both be set.\n\n\
             💡 Hint: Keep 'source' for a JSON orders file or 'url' for an order service."
        );
    }

    if let Some(format) = config.format.as_deref() {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}
