//! Single-task depth-first scrape strategy.
//!
//! Walks the same traversal policy as the concurrent scheduler but in one
//! task: pages are deduplicated through a local set, images are
//! downloaded inline before any further link is followed, and — unlike
//! the concurrent variant — an image referenced from several pages is
//! downloaded once per referencing page. With no task fan-out there is
//! nothing to quiesce, so a sequential scrape always completes.

use std::collections::HashSet;

use futures::FutureExt;
use futures::future::BoxFuture;
use log::{error, info};
use tokio::sync::oneshot;
use url::Url;

use crate::config::ScrapeConfig;
use crate::fetcher::HttpFetcher;
use crate::image_store;
use crate::page_parser;
use crate::scrape_engine::request::ScrapeRequest;
use crate::scrape_engine::types::{ScrapeOutcome, Scraper};
use crate::utils::url_utils::is_outbound_link;

/// Scrape the configured site depth-first in the calling task.
pub async fn scrape_site_sequential(config: ScrapeConfig) -> ScrapeOutcome {
    let fetcher = HttpFetcher::new();
    let seed = config.seed_url().clone();
    let mut visited_pages = HashSet::new();
    visited_pages.insert(seed.as_str().to_owned());

    scrape_page(&fetcher, &config, &mut visited_pages, seed, 0).await;
    ScrapeOutcome::Completed
}

/// Boxed for recursion: the future type of an async fn that awaits
/// itself would otherwise be infinite.
fn scrape_page<'a>(
    fetcher: &'a HttpFetcher,
    config: &'a ScrapeConfig,
    visited_pages: &'a mut HashSet<String>,
    page: Url,
    depth: u8,
) -> BoxFuture<'a, ()> {
    async move {
        info!("scraping page [depth {depth}]: {page}");

        let html = match fetcher.fetch_document(&page).await {
            Ok(html) => html,
            Err(e) => {
                error!("failed to scrape page {page}: {e}");
                return;
            }
        };

        let (links, images) = page_parser::extract_links_and_images(&html, &page);

        for image in images {
            let Some(path) = image_store::resolve_local_path(&image, config.output_dir()) else {
                continue;
            };
            let image_url = match Url::parse(&image) {
                Ok(url) => url,
                Err(e) => {
                    error!("failed to download image {image}: {e}");
                    continue;
                }
            };
            info!("downloading image: {image_url}");
            if let Err(e) = image_store::download_to(fetcher, &image_url, &path).await {
                error!("failed to download image {image_url}: {e}");
            }
        }

        if depth < config.max_depth() {
            for link in links {
                let Ok(link_url) = Url::parse(&link) else {
                    continue;
                };
                if !visited_pages.insert(link_url.as_str().to_owned()) {
                    continue;
                }
                if is_outbound_link(config.seed_url(), &link_url)
                    && !config.follow_outbound_links()
                {
                    continue;
                }
                scrape_page(fetcher, config, visited_pages, link_url, depth + 1).await;
            }
        }
    }
    .boxed()
}

/// Sequential [`Scraper`] strategy backed by [`scrape_site_sequential`].
pub struct SequentialScraper {
    config: ScrapeConfig,
}

impl Scraper for SequentialScraper {
    fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    fn scrape(&self) -> ScrapeRequest {
        let (tx, rx) = oneshot::channel();
        let config = self.config.clone();
        tokio::spawn(async move {
            let _ = tx.send(scrape_site_sequential(config).await);
        });
        ScrapeRequest::new(rx)
    }
}
