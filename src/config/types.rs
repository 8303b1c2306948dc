//! Core configuration type for scrape operations.

use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Parameters for one scrape invocation.
///
/// **INVARIANT:** `seed_url` is an absolute http(s) URL and `output_dir`
/// exists as a directory (both validated in the builder). Fields are set
/// once and never mutated; the engine shares the config by reference
/// across every task it spawns.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub(crate) seed_url: Url,
    pub(crate) output_dir: PathBuf,
    pub(crate) max_depth: u8,
    pub(crate) follow_outbound_links: bool,

    /// How long the entry point waits for quiescence before reporting the
    /// scrape as interrupted. Tasks still in flight when this elapses keep
    /// running in the background and are abandoned.
    pub(crate) wait_timeout: Duration,
}
