//! Player configuration loader.

use std::path::Path;

use trade_core::Configuration;

use crate::loaders::{LoadResult, read_file};

/// File formats a configuration can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigurationFormat {
    Toml,
    Ron,
}

impl ConfigurationFormat {
    /// Picks the format from a file extension (`.toml` or `.ron`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else if extension.eq_ignore_ascii_case("ron") {
            Some(Self::Ron)
        } else {
            None
        }
    }
}

/// Loader for player configurations from TOML or RON files.
pub struct ConfigurationLoader;

impl ConfigurationLoader {
    /// Load a configuration, choosing the parser by file extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.toml` or `.ron` file containing a Configuration
    pub fn load(path: &Path) -> LoadResult<Configuration> {
        let format = ConfigurationFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported configuration file {} (expected .toml or .ron)",
                path.display()
            )
        })?;

        let content = read_file(path)?;
        let config = Self::parse(&content, format)?;

        tracing::debug!(
            "Loaded configuration from {}: {} options, {} equipment entries",
            path.display(),
            config.options.len(),
            config.equipped.len()
        );

        Ok(config)
    }

    /// Parse configuration text in the given format.
    pub fn parse(content: &str, format: ConfigurationFormat) -> LoadResult<Configuration> {
        match format {
            ConfigurationFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse configuration TOML: {}", e)),
            ConfigurationFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse configuration RON: {}", e)),
        }
    }
}
