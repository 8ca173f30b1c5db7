//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use trade_content::ConfigurationLoader;
use trade_core::{Configuration, EquipmentId, EquipmentState, OptionId};

use crate::config::CliConfig;
use crate::render::OutputFormat;

/// Trade delivery bonus calculator
#[derive(Debug, Parser)]
#[command(name = "trade-calc")]
#[command(about = "Computes the trade delivery bonus of a setup", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (.toml or .ron); overrides TRADE_CALC_CONFIG
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable an option (repeatable)
    #[arg(short, long = "option", value_name = "NAME")]
    pub options: Vec<OptionId>,

    /// Disable an option enabled by the configuration file (repeatable)
    #[arg(long = "disable", value_name = "NAME")]
    pub disabled: Vec<OptionId>,

    /// Equip an item, optionally with an upgrade count (repeatable)
    #[arg(short, long = "equip", value_name = "NAME[:UPGRADES]", value_parser = parse_equip)]
    pub equip: Vec<(EquipmentId, i32)>,

    /// Unequip an item equipped by the configuration file (repeatable)
    #[arg(long = "unequip", value_name = "NAME")]
    pub unequip: Vec<EquipmentId>,

    /// Output format; overrides TRADE_CALC_FORMAT
    #[arg(short, long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    pub fn output_format(&self, defaults: &CliConfig) -> OutputFormat {
        self.format.unwrap_or(defaults.format)
    }

    /// Builds the configuration to evaluate.
    ///
    /// Starts from the configuration file (flag first, then environment) or
    /// an empty configuration, then applies the flags in order: enables,
    /// disables, equips, unequips.
    pub fn configuration(&self, defaults: &CliConfig) -> Result<Configuration> {
        let path = self.config.as_ref().or(defaults.config_path.as_ref());

        let mut config = match path {
            Some(path) => ConfigurationLoader::load(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => Configuration::new(),
        };

        for &id in &self.options {
            config.set_option(id, true);
        }
        for &id in &self.disabled {
            config.set_option(id, false);
        }
        for &(id, upgrades) in &self.equip {
            config.set_equipment(id, EquipmentState::active(upgrades));
        }
        for &id in &self.unequip {
            let state = config.equipment(id);
            config.set_equipment(id, EquipmentState::inactive(state.upgrades));
        }

        Ok(config)
    }
}

/// Parses `NAME` or `NAME:UPGRADES`.
fn parse_equip(value: &str) -> Result<(EquipmentId, i32), String> {
    let (name, upgrades) = match value.split_once(':') {
        Some((name, upgrades)) => {
            let upgrades = upgrades
                .trim()
                .parse::<i32>()
                .map_err(|e| format!("invalid upgrade count '{upgrades}': {e}"))?;
            (name, upgrades)
        }
        None => (value, 0),
    };

    let id = name
        .trim()
        .parse::<EquipmentId>()
        .map_err(|_| format!("unknown equipment '{name}'"))?;

    Ok((id, upgrades))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("trade-calc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn equip_accepts_optional_upgrades() {
        assert_eq!(parse_equip("penguino"), Ok((EquipmentId::Penguino, 0)));
        assert_eq!(parse_equip("pet_leaf:4"), Ok((EquipmentId::PetLeaf, 4)));
        assert_eq!(parse_equip("Water_Leaf: 10"), Ok((EquipmentId::WaterLeaf, 10)));
        assert!(parse_equip("dragon").is_err());
        assert!(parse_equip("penguino:many").is_err());
    }

    #[test]
    fn flags_build_a_configuration() {
        let cli = parse(&[
            "--option",
            "pet_scroll",
            "-o",
            "better_pets",
            "--equip",
            "penguino:4",
            "--equip",
            "butterflyo",
        ]);

        let config = cli.configuration(&CliConfig::default()).unwrap();

        assert!(config.is_option_enabled(OptionId::PetScroll));
        assert!(config.is_option_enabled(OptionId::BetterPets));
        assert!(!config.is_option_enabled(OptionId::UniqueScroll));
        assert_eq!(config.equipment(EquipmentId::Penguino), EquipmentState::active(4));
        assert_eq!(config.equipment(EquipmentId::Butterflyo), EquipmentState::active(0));
        assert!(!config.equipment(EquipmentId::PetLeaf).active);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(Cli::try_parse_from(["trade-calc", "--option", "lucky_charm"]).is_err());
        assert!(Cli::try_parse_from(["trade-calc", "--equip", "dragon:2"]).is_err());
    }

    #[test]
    fn flags_override_the_configuration_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("setup.toml");
        fs::write(
            &path,
            r#"
[options]
better_pets = true
pet_scroll = true

[equipped.penguino]
active = true
upgrades = 2

[equipped.pet_leaf]
active = true
upgrades = 7
"#,
        )
        .unwrap();

        let cli = parse(&[
            "--disable",
            "pet_scroll",
            "--equip",
            "penguino:9",
            "--unequip",
            "pet_leaf",
        ]);
        let defaults = CliConfig {
            config_path: Some(path),
            ..CliConfig::default()
        };

        let config = cli.configuration(&defaults).unwrap();

        assert!(config.is_option_enabled(OptionId::BetterPets));
        assert!(!config.is_option_enabled(OptionId::PetScroll));
        assert_eq!(config.equipment(EquipmentId::Penguino), EquipmentState::active(9));
        assert_eq!(config.equipment(EquipmentId::PetLeaf), EquipmentState::inactive(7));
    }

    #[test]
    fn config_flag_wins_over_environment_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("setup.ron");
        fs::write(&path, "(options: {traders_crunch_challenge: true})").unwrap();

        let cli = parse(&["--config", path.to_str().unwrap()]);
        let defaults = CliConfig {
            config_path: Some(dir.path().join("missing.toml")),
            ..CliConfig::default()
        };

        let config = cli.configuration(&defaults).unwrap();
        assert!(config.is_option_enabled(OptionId::TradersCrunchChallenge));
    }

    #[test]
    fn missing_configuration_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cli = parse(&["--config", dir.path().join("absent.toml").to_str().unwrap()]);

        let error = cli.configuration(&CliConfig::default()).unwrap_err();
        assert!(error.to_string().contains("Failed to load configuration"));
    }

    #[test]
    fn format_flag_overrides_environment() {
        let env = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };

        assert_eq!(parse(&[]).output_format(&env), OutputFormat::Json);
        assert_eq!(parse(&["--format", "text"]).output_format(&env), OutputFormat::Text);
        assert_eq!(parse(&["-f", "JSON"]).output_format(&CliConfig::default()), OutputFormat::Json);
    }
}
