//! Configuration file support for scan-grid.
//!
//! Provides YAML-based configuration through `scan-grid.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::RenderMode;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "scan-grid.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Scan records file used when `--records` is not given.
    pub records: Option<PathBuf>,
    /// Page length for requests built from flags.
    pub page_length: Option<i64>,
    /// Read timeout in seconds; 0 disables the timeout.
    pub read_timeout_secs: Option<u64>,
    pub render: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured render mode, if any. Validated on load.
    pub fn render_mode(&self) -> Option<RenderMode> {
        self.render.as_deref().and_then(|r| r.parse().ok())
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

    // An empty file deserializes to YAML null; treat it as "no settings".
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.page_length == Some(0) {
        bail!(
            "Invalid config: page_length must not be 0.\n\n\
             💡 Hint: Use a positive page size, or -1 to return every row."
        );
    }
    if let Some(ref render) = config.render {
        if let Err(e) = render.parse::<RenderMode>() {
            bail!("Invalid config: {}", e);
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}
