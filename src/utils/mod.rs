//! Shared constants and URL helpers.

pub mod constants;
pub mod url_utils;

pub use constants::{DEFAULT_MAX_DEPTH, MAX_PATH_PROBES, SCRAPE_WAIT_TIMEOUT_SECS};
pub use url_utils::{is_http_url, is_outbound_link};
