//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! The builder requires the seed URL and output directory to be set, in
//! that order, before `build()` becomes available; optional knobs can be
//! set at any point.

use anyhow::{Result, anyhow, bail};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use super::types::ScrapeConfig;
use crate::utils::constants::{DEFAULT_MAX_DEPTH, SCRAPE_WAIT_TIMEOUT_SECS};
use crate::utils::url_utils::is_http_url;

// Type states for the builder
pub struct WithSeedUrl;
pub struct WithOutputDir;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) seed_url: Option<String>,
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) max_depth: u8,
    pub(crate) follow_outbound_links: bool,
    pub(crate) wait_timeout: Duration,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            seed_url: None,
            output_dir: None,
            max_depth: DEFAULT_MAX_DEPTH,
            follow_outbound_links: false,
            wait_timeout: Duration::from_secs(SCRAPE_WAIT_TIMEOUT_SECS),
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

// Optional knobs, available in any state
impl<State> ScrapeConfigBuilder<State> {
    /// Maximum link-following depth; 0 scrapes only the seed page.
    #[must_use]
    pub fn max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Whether to follow links whose host differs from the seed's host.
    #[must_use]
    pub fn follow_outbound_links(mut self, follow: bool) -> Self {
        self.follow_outbound_links = follow;
        self
    }

    /// How long to wait for quiescence before reporting an interrupted scrape.
    #[must_use]
    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn seed_url(self, url: impl Into<String>) -> ScrapeConfigBuilder<WithSeedUrl> {
        ScrapeConfigBuilder {
            seed_url: Some(url.into()),
            output_dir: self.output_dir,
            max_depth: self.max_depth,
            follow_outbound_links: self.follow_outbound_links,
            wait_timeout: self.wait_timeout,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfigBuilder<WithSeedUrl> {
    pub fn output_dir(self, dir: impl Into<PathBuf>) -> ScrapeConfigBuilder<WithOutputDir> {
        ScrapeConfigBuilder {
            seed_url: self.seed_url,
            output_dir: Some(dir.into()),
            max_depth: self.max_depth,
            follow_outbound_links: self.follow_outbound_links,
            wait_timeout: self.wait_timeout,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when all required fields are set
impl ScrapeConfigBuilder<WithOutputDir> {
    /// Validate the parameters and produce an immutable [`ScrapeConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the seed URL is not an absolute http(s) URL or
    /// the output directory does not exist as a directory.
    pub fn build(self) -> Result<ScrapeConfig> {
        let raw_url = self.seed_url.ok_or_else(|| anyhow!("seed_url is required"))?;
        let seed_url =
            Url::parse(&raw_url).map_err(|e| anyhow!("invalid seed URL '{raw_url}': {e}"))?;
        if !is_http_url(&seed_url) {
            bail!("seed URL must use http or https: {raw_url}");
        }

        let output_dir = self
            .output_dir
            .ok_or_else(|| anyhow!("output_dir is required"))?;
        if !output_dir.is_dir() {
            bail!("{} is not a directory", output_dir.display());
        }

        Ok(ScrapeConfig {
            seed_url,
            output_dir,
            max_depth: self.max_depth,
            follow_outbound_links: self.follow_outbound_links,
            wait_timeout: self.wait_timeout,
        })
    }
}
