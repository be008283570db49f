use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use verba_lib::{CrawlMode, PortalScraper, QueryFilter};

#[derive(Parser)]
#[command(name = "verba")]
#[command(about = "Crawl indemnity-allowance report links from a legislative transparency portal")]
struct Cli {
    /// Base URL of the portal
    #[arg(long, default_value = "https://al.to.leg.br")]
    base_url: String,

    /// Years to crawl (e.g. 2019,2020); all discovered years when omitted
    #[arg(long, value_delimiter = ',')]
    years: Vec<String>,

    /// Months to crawl (e.g. 1,2,3); all valid months when omitted
    #[arg(long, value_delimiter = ',')]
    months: Vec<String>,

    /// Politicians to crawl, by exact form value; all when omitted
    #[arg(long, value_delimiter = ',')]
    politicians: Vec<String>,

    /// Crawl mode: aggregate (one request per year/month) or
    /// per-politician (one request per year/month/politician, much slower)
    #[arg(long, default_value = "aggregate")]
    mode: CrawlMode,

    /// Path of the JSON output file
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// Verbosity: -v logs progress, -vv logs discovery details
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "verba_lib=info,verba_api=info",
        _ => "verba_lib=debug,verba_api=debug",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_directives(cli.verbose))),
        )
        .with_target(false)
        .init();

    let mut scraper = PortalScraper::new(&cli.base_url);

    let domain = scraper.discover().await?;
    tracing::info!("portal offers years: {}", domain.years.join(", "));

    let filter = QueryFilter::new()
        .with_years(cli.years)
        .with_months(cli.months)
        .with_politicians(cli.politicians);

    scraper.crawl(&filter, cli.mode).await?;

    scraper.save_json(&cli.output)?;
    let tree = scraper.result()?;
    println!(
        "Saved {} report links to {}",
        tree.entry_count(),
        cli.output.display()
    );

    Ok(())
}
