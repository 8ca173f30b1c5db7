//! Trade delivery bonus calculator.
//!
//! Reads a setup from a configuration file and/or flags, evaluates it against
//! the standard catalog and prints the total with per-source attribution.
mod args;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use trade_core::calculate_bonus;

use crate::args::Cli;
use crate::config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (for TRADE_CALC_CONFIG and TRADE_CALC_FORMAT)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let defaults = CliConfig::from_env();

    let config = cli.configuration(&defaults)?;
    let bonus = calculate_bonus(&config)?;

    tracing::info!("Total trade delivery bonus: {:.4}", bonus.total());

    print!("{}", render::render(&bonus, cli.output_format(&defaults))?);
    Ok(())
}
