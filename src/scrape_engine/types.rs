//! Core types and traits for scrape operations.

use crate::config::ScrapeConfig;
use crate::scrape_engine::request::ScrapeRequest;

/// The caller-visible result of a scrape invocation.
///
/// Failures inside individual tasks are logged and contained; the only
/// outcomes the entry point distinguishes are a normal quiescent return
/// and a timed-out wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// Every transitively spawned task finished before the wait timeout.
    Completed,
    /// The wait timeout elapsed with tasks still in flight; those tasks
    /// keep running in the background and are abandoned.
    Interrupted,
}

/// A trait defining the interface for image scrapers.
///
/// Both strategy implementations expose the same capability; callers pick
/// one and `.await` the returned [`ScrapeRequest`].
pub trait Scraper {
    /// Create a new scraper with the given configuration.
    fn new(config: ScrapeConfig) -> Self;

    /// Start the scrape and return a future for its outcome.
    fn scrape(&self) -> ScrapeRequest;
}
