/*
[INPUT]:  CLI arguments, optional YAML configuration file, BITSTAMP_* env vars
[OUTPUT]: Pretty-printed JSON response on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bitstamp_cli::{CliConfig, Command};

#[derive(Parser, Debug)]
#[command(name = "bitstamp", version, about = "Bitstamp REST API command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };
    debug!(base_url = %config.base_url, "configuration loaded");

    let response = args.command.execute(&config).await?;
    let rendered = serde_json::to_string_pretty(&response).context("render response")?;
    println!("{rendered}");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<CliConfig> {
    CliConfig::from_file(path).context("load config")
}
