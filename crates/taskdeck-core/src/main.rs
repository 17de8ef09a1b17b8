/*
[INPUT]:  CLI arguments and YAML configuration file
[OUTPUT]: Running interactive task client
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskdeck_core::AppConfig;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about = "Terminal client for the taskdeck service")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = load_config(args.config_path.as_ref())?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    info!(base_url = %config.base_url, "starting taskdeck");
    cli::run(config).await
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            AppConfig::from_file(path_str).context("load config")
        }
        None => Ok(AppConfig::default()),
    }
}
