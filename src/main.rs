use std::{fs::File, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_tracker::{
    api::{AvApi, QuoteSource},
    app::{App, Portfolio},
    config::{API_KEY_VAR, Cli, Command, Config},
};

fn init_logger(config: &Config) -> Result<()> {
    let file = File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {:?}", config.log_file()))?;

    env_logger::Builder::new()
        .filter_level(*config.log_level())
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialize logger")
}

async fn print_quote(api: &AvApi, symbol: &str) -> ExitCode {
    match api.get_price(symbol).await {
        Ok(price) => {
            println!("{} {:.2}", symbol.trim().to_uppercase(), price);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to get a quote for {}: {:#}", symbol, e);
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    init_logger(&config)?;

    let api = AvApi::new(&config)?;
    if !api.has_api_key() {
        log::warn!("{} is not set, every quote lookup will fail", API_KEY_VAR);
    }

    if let Some(Command::Quote { symbol }) = &cli.command {
        return Ok(print_quote(&api, symbol).await);
    }

    let portfolio = Arc::new(Portfolio::new(Arc::new(api)));
    let mut app = App::new(portfolio);
    app.run().await?;

    Ok(ExitCode::SUCCESS)
}
