use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use imgscrape::config::ScrapeConfig;
use imgscrape::scrape_engine::{scrape_site, scrape_site_sequential};
use imgscrape::utils::constants::DEFAULT_MAX_DEPTH;

#[derive(Parser, Debug)]
#[command(
    name = "imgscrape",
    version,
    about = "Crawl a web site from a seed URL and download the images it references"
)]
struct Cli {
    /// Seed URL to start scraping from (absolute, http or https)
    seed_url: String,

    /// Existing directory to download images into
    output_dir: PathBuf,

    /// Maximum link-following depth (0 scrapes only the seed page)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u8,

    /// Follow links whose host differs from the seed's host
    #[arg(long)]
    outbound: bool,

    /// Scrape depth-first in a single task instead of concurrently
    #[arg(long)]
    sequential: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match ScrapeConfig::builder()
        .seed_url(cli.seed_url)
        .output_dir(cli.output_dir)
        .max_depth(cli.depth)
        .follow_outbound_links(cli.outbound)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // An interrupted scrape is still a clean exit; progress and failures
    // were already reported on the way through.
    if cli.sequential {
        scrape_site_sequential(config).await;
    } else {
        scrape_site(config).await;
    }

    ExitCode::SUCCESS
}
