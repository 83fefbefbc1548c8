use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use quotd::config::Config;
use quotd::logging;
use quotd::ui::runtime;

#[derive(Parser)]
#[command(name = "quotd")]
#[command(about = "Random inspirational quotes in your terminal")]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to the per-user config location).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the quote API endpoint for this run.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.api.url = endpoint;
        config.validate().context("invalid endpoint override")?;
    }

    runtime::run(config)
}
