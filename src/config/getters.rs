//! Getter methods for `ScrapeConfig`.

use std::path::Path;
use std::time::Duration;
use url::Url;

use super::types::ScrapeConfig;

impl ScrapeConfig {
    #[must_use]
    pub fn seed_url(&self) -> &Url {
        &self.seed_url
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[must_use]
    pub fn follow_outbound_links(&self) -> bool {
        self.follow_outbound_links
    }

    #[must_use]
    pub fn wait_timeout(&self) -> Duration {
        self.wait_timeout
    }
}
