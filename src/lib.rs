//! imgscrape: crawl a web site from a seed URL and download every image it
//! references, bounded by a maximum link depth and an outbound-link policy.
//!
//! The crate is organized around one core component, the scrape engine, and
//! three narrow collaborators:
//!
//! - [`fetcher`] retrieves page documents and image bytes over HTTP
//! - [`page_parser`] extracts absolute link and image addresses from HTML
//! - [`image_store`] resolves collision-free local paths and writes images
//! - [`scrape_engine`] owns traversal policy, deduplication, task dispatch
//!   and quiescence detection
//!
//! A scrape is a one-shot batch operation: [`scrape_site`] seeds a single
//! page task, lets the task graph fan out across the tokio runtime, and
//! blocks until every transitively spawned task has finished or the
//! configured wait timeout elapses.

pub mod config;
pub mod fetcher;
pub mod image_store;
pub mod page_parser;
pub mod scrape_engine;
pub mod utils;

pub use config::ScrapeConfig;
pub use fetcher::{FetchError, HttpFetcher};
pub use scrape_engine::{
    ParallelScraper, ScrapeOutcome, ScrapeRequest, Scraper, SequentialScraper, scrape_site,
    scrape_site_sequential,
};
