//! Concurrent scrape scheduler.
//!
//! Each page task fetches and parses one page, spawns a download task per
//! newly discovered image and a child page task per newly discovered link,
//! then reports itself complete. Tasks never wait on one another; all
//! coordination goes through the shared dedup sets and the task counter,
//! so the graph cannot deadlock. The entry point blocks only on the
//! counter returning to zero.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use log::{error, info, warn};
use tokio::sync::oneshot;
use url::Url;

use crate::config::ScrapeConfig;
use crate::fetcher::HttpFetcher;
use crate::image_store;
use crate::page_parser;
use crate::scrape_engine::request::ScrapeRequest;
use crate::scrape_engine::task_counter::TaskCounter;
use crate::scrape_engine::types::{ScrapeOutcome, Scraper};
use crate::scrape_engine::visited::VisitedSet;
use crate::utils::url_utils::is_outbound_link;

/// Shared state for one scrape invocation.
///
/// Constructed fresh per [`scrape_site`] call and dropped when it
/// returns; nothing leaks across invocations, so independent scrapes are
/// safe to run concurrently.
struct ScrapeContext {
    config: ScrapeConfig,
    fetcher: HttpFetcher,
    visited_pages: VisitedSet,
    visited_images: VisitedSet,
    tasks: TaskCounter,
}

/// Scrape the configured site concurrently.
///
/// Seeds a single page task for the seed URL at depth 0 and blocks until
/// every transitively spawned task has finished or the configured wait
/// timeout elapses. Task failures are logged, never propagated; the only
/// caller-visible outcomes are [`ScrapeOutcome::Completed`] and
/// [`ScrapeOutcome::Interrupted`].
pub async fn scrape_site(config: ScrapeConfig) -> ScrapeOutcome {
    let wait_timeout = config.wait_timeout();
    let seed = config.seed_url().clone();
    let ctx = Arc::new(ScrapeContext {
        fetcher: HttpFetcher::new(),
        visited_pages: VisitedSet::new(),
        visited_images: VisitedSet::new(),
        tasks: TaskCounter::new(),
        config,
    });

    ctx.visited_pages.check_and_insert(seed.as_str());
    ctx.tasks.task_queued();
    tokio::spawn(scrape_page(Arc::clone(&ctx), seed, 0));

    if ctx.tasks.wait_idle(wait_timeout).await {
        ScrapeOutcome::Completed
    } else {
        warn!(
            "scrape interrupted: tasks still in flight after {}s; abandoning them",
            wait_timeout.as_secs()
        );
        ScrapeOutcome::Interrupted
    }
}

/// One page task: fetch, parse, fan out, report complete.
///
/// Boxed so the recursive spawn has a finite future type. The counter is
/// decremented exactly once on every exit path, after the whole body —
/// including all of its own submissions — has run.
fn scrape_page(ctx: Arc<ScrapeContext>, page: Url, depth: u8) -> BoxFuture<'static, ()> {
    async move {
        scrape_page_inner(&ctx, &page, depth).await;
        ctx.tasks.task_complete();
    }
    .boxed()
}

async fn scrape_page_inner(ctx: &Arc<ScrapeContext>, page: &Url, depth: u8) {
    info!("scraping page [depth {depth}]: {page}");

    let html = match ctx.fetcher.fetch_document(page).await {
        Ok(html) => html,
        Err(e) => {
            error!("failed to scrape page {page}: {e}");
            return;
        }
    };

    let (links, images) = page_parser::extract_links_and_images(&html, page);

    for image in images {
        // Whoever inserts first owns the download; everyone else skips.
        if !ctx.visited_images.check_and_insert(&image) {
            continue;
        }
        let image_url = match Url::parse(&image) {
            Ok(url) => url,
            Err(e) => {
                error!("failed to download image {image}: {e}");
                continue;
            }
        };
        let Some(path) = image_store::resolve_local_path(&image, ctx.config.output_dir()) else {
            // No collision-free name left; skip, not an error.
            continue;
        };

        info!("downloading image: {image_url}");
        ctx.tasks.task_queued();
        let task_ctx = Arc::clone(ctx);
        tokio::spawn(async move {
            if let Err(e) = image_store::download_to(&task_ctx.fetcher, &image_url, &path).await {
                error!("failed to download image {image_url}: {e}");
            }
            task_ctx.tasks.task_complete();
        });
    }

    // Strict comparison: at max_depth we still download this page's
    // images but follow no further links.
    if depth < ctx.config.max_depth() {
        for link in links {
            let Ok(link_url) = Url::parse(&link) else {
                // malformed link; drop it and keep going
                continue;
            };
            if !ctx.visited_pages.check_and_insert(link_url.as_str()) {
                continue;
            }
            if is_outbound_link(ctx.config.seed_url(), &link_url)
                && !ctx.config.follow_outbound_links()
            {
                continue;
            }

            ctx.tasks.task_queued();
            tokio::spawn(scrape_page(Arc::clone(ctx), link_url, depth + 1));
        }
    }
}

/// Concurrent [`Scraper`] strategy backed by [`scrape_site`].
pub struct ParallelScraper {
    config: ScrapeConfig,
}

impl Scraper for ParallelScraper {
    fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    fn scrape(&self) -> ScrapeRequest {
        let (tx, rx) = oneshot::channel();
        let config = self.config.clone();
        tokio::spawn(async move {
            let _ = tx.send(scrape_site(config).await);
        });
        ScrapeRequest::new(rx)
    }
}
