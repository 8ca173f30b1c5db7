//! CLI runtime configuration.
use std::env;
use std::path::PathBuf;

use crate::render::OutputFormat;

/// Defaults read from the environment, overridden by command-line flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Configuration file evaluated when `--config` is not given.
    pub config_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `TRADE_CALC_CONFIG`
    /// - `TRADE_CALC_FORMAT` (`text` or `json`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("TRADE_CALC_CONFIG").filter(|path| !path.is_empty()) {
            config.config_path = Some(PathBuf::from(path));
        }

        if let Some(format) = lookup("TRADE_CALC_FORMAT") {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(_) => tracing::warn!("Ignoring unknown TRADE_CALC_FORMAT '{}'", format),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(CliConfig::from_lookup(lookup(&[])), CliConfig::default());
    }

    #[test]
    fn reads_path_and_format() {
        let config = CliConfig::from_lookup(lookup(&[
            ("TRADE_CALC_CONFIG", "setups/main.toml"),
            ("TRADE_CALC_FORMAT", "JSON"),
        ]));

        assert_eq!(config.config_path, Some(PathBuf::from("setups/main.toml")));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn ignores_empty_path_and_unknown_format() {
        let config = CliConfig::from_lookup(lookup(&[
            ("TRADE_CALC_CONFIG", ""),
            ("TRADE_CALC_FORMAT", "yaml"),
        ]));

        assert_eq!(config, CliConfig::default());
    }
}
