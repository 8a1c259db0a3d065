//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `oge` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing one JSON record per URL, or running the HTTP endpoint

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use oge::initialization::init_logger_with;
use oge::{resolve_urls, server, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set PORT or OGE_USER_AGENT; a missing file is fine
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if opt.serve {
        return server::start_server(&config).await;
    }

    let report = match resolve_urls(&config, &opt.urls).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("oge error: {:#}", e);
            process::exit(1);
        }
    };

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(record) => {
                let json = if opt.pretty {
                    record.to_json_pretty()
                } else {
                    record.to_json()
                };
                println!("{json}");
            }
            Err(e) => eprintln!("{}: {}", outcome.url, e),
        }
    }

    if report.failed() > 0 {
        process::exit(1);
    }
    Ok(())
}
