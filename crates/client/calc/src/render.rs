//! Output rendering for evaluated bonuses.

use std::fmt::Write as _;
use std::str::FromStr;

use clap::ValueEnum;
use trade_core::{Bonus, BonusReport};

/// How the result is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Total followed by ranked per-source attribution.
    #[default]
    Text,
    /// The full report as pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

pub fn render(bonus: &Bonus, format: OutputFormat) -> anyhow::Result<String> {
    let report = bonus.report();
    match format {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}

fn render_text(report: &BonusReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "total: {:.4}", report.total);

    let _ = writeln!(out, "contributions:");
    let ranked: Vec<_> = report
        .ranked_sources()
        .into_iter()
        .filter(|(_, value)| *value != 0.0)
        .collect();
    if ranked.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    let width = ranked
        .iter()
        .map(|(source, _)| source.to_string().len())
        .max()
        .unwrap_or(0);
    for (source, value) in &ranked {
        let _ = writeln!(out, "  {:<width$}  {:.4}", source.to_string(), value);
    }

    let upgrades: Vec<_> = report
        .upgrade_contribution
        .iter()
        .filter(|(_, value)| **value != 0.0)
        .collect();
    if !upgrades.is_empty() {
        let _ = writeln!(out, "upgrade slots:");
        for (id, value) in upgrades {
            let _ = writeln!(out, "  {id}  {value:.4}");
        }
    }

    out
}
