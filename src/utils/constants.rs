//! Shared configuration constants for imgscrape
//!
//! This module contains default values used throughout the codebase to
//! ensure consistency and avoid magic numbers.

/// Default maximum crawl depth: 3 levels
///
/// Limits how deep the scraper will follow links from the seed URL.
/// A depth of 0 scrapes only the seed page itself.
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// Default quiescence wait timeout: 60 seconds
///
/// How long [`scrape_site`](crate::scrape_site) blocks for the in-flight
/// task count to return to zero before giving up and returning control to
/// the caller. Tasks still running at that point are abandoned, not
/// cancelled.
pub const SCRAPE_WAIT_TIMEOUT_SECS: u64 = 60;

/// Maximum number of candidate file names probed per image: 100
///
/// The image store tries the base name first, then `name(1)`, `name(2)`, …
/// Once this many candidates exist on disk, path resolution gives up and
/// the image is skipped.
pub const MAX_PATH_PROBES: u32 = 100;
