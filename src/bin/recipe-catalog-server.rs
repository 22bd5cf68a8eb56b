// ABOUTME: Server binary for the Smart Recipe Explorer API
// ABOUTME: Loads configuration, applies CLI overrides, initializes logging and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # Recipe Catalog Server Binary
//!
//! Starts the recipe catalog HTTP API with the seeded catalog and whichever
//! suggestion providers have credentials in the environment.

use anyhow::Result;
use clap::Parser;
use recipe_catalog::{
    config::environment::{load_dotenv, ServerConfig},
    logging, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-catalog-server")]
#[command(about = "Smart Recipe Explorer API - recipe catalog with AI suggestions")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG and LOG_FORMAT may come from .env
    load_dotenv();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Smart Recipe Explorer API");
    info!("{}", config.summary());

    if let Err(e) = server::run(config).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
