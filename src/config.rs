//! Configuration file support for labdoc.
//!
//! Provides YAML-based configuration through `labdoc.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::{DocumentView, OutputFormat};
use crate::formula::policies::MissingRatioPolicy;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "labdoc.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub view: Option<String>,
    pub format: Option<String>,
    pub store_url: Option<String>,
    pub allergen_threshold: Option<f64>,
    pub missing_ratio: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn view(&self) -> Result<Option<DocumentView>> {
        parse_field(self.view.as_deref(), "view")
    }

    pub fn format(&self) -> Result<Option<OutputFormat>> {
        parse_field(self.format.as_deref(), "format")
    }

    pub fn missing_ratio(&self) -> Result<Option<MissingRatioPolicy>> {
        parse_field(self.missing_ratio.as_deref(), "missing_ratio")
    }
}

fn parse_field<T: FromStr<Err = String>>(value: Option<&str>, field: &str) -> Result<Option<T>> {
    value
        .map(|v| T::from_str(v).map_err(|e| anyhow::anyhow!("Invalid config: {}: {}", field, e)))
        .transpose()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
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
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(threshold) = config.allergen_threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            bail!(
                "Invalid config: allergen_threshold must be a non-negative number, got {}.\n\n\
                 💡 Hint: The default reporting threshold is 0.001 (%).",
                threshold
            );
        }
    }
    if let Some(url) = &config.store_url {
        if url.trim().is_empty() {
            bail!("Invalid config: store_url must not be empty.");
        }
    }
    config.view()?;
    config.format()?;
    config.missing_ratio()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
