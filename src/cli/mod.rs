// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;

use crate::fetch::{FetchConfig, HtmlFetcher};

/// Fabstir HTML Fetcher CLI
#[derive(Parser, Debug)]
#[command(name = "fabstir-html-fetcher")]
#[command(version = "1.0.0")]
#[command(about = "Fetch the raw HTML content of a URL", long_about = None)]
pub struct Cli {
    /// URL to fetch
    pub url: Option<String>,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let Some(url) = cli.url else {
        println!("Usage: fabstir-html-fetcher <url>");
        println!("Example: fabstir-html-fetcher https://example.com");
        std::process::exit(1);
    };

    let config = FetchConfig::from_env();
    if let Err(e) = config.validate() {
        anyhow::bail!("Invalid fetch configuration: {}", e);
    }

    let fetcher = HtmlFetcher::new(config);
    let html = fetcher.fetch_html(&url).await?;
    println!("{}", html);

    Ok(())
}
