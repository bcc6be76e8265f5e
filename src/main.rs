use anyhow::Context;
use clap::Parser;

use vota_informado::app::App;
use vota_informado::cli::{self, Args};
use vota_informado::config::Config;
use vota_informado::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?
    .with_api_url(args.api_url.clone());
    config.validate().context("invalid configuration")?;

    let tokens = App::token_store(&config, args.ephemeral);
    let app = App::from_config(&config, tokens).context("failed to build API client")?;

    for line in cli::run(&app, args.command).await? {
        println!("{line}");
    }
    Ok(())
}
