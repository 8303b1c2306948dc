//! Scrape Engine Module
//!
//! The concurrent crawl scheduler: traversal policy (depth limit and
//! outbound-link filter), page/image deduplication, dispatch of page and
//! download tasks onto the tokio runtime, and quiescence detection so the
//! caller can block until all transitively spawned work has finished or a
//! timeout elapses.
//!
//! Two interchangeable strategies implement the [`Scraper`] capability:
//! [`ParallelScraper`] (the canonical concurrent implementation) and
//! [`SequentialScraper`] (a single-task depth-first walk).

pub mod parallel;
pub mod request;
pub mod sequential;
pub mod task_counter;
pub mod types;
pub mod visited;

// Re-exports for public API
pub use parallel::{ParallelScraper, scrape_site};
pub use request::ScrapeRequest;
pub use sequential::{SequentialScraper, scrape_site_sequential};
pub use task_counter::TaskCounter;
pub use types::{ScrapeOutcome, Scraper};
pub use visited::VisitedSet;
