//! Immutable per-invocation scrape parameters.
//!
//! A [`ScrapeConfig`] is built once per scrape via the typestate builder
//! ([`ScrapeConfig::builder`]) and never mutated afterwards. The builder
//! validates the seed URL and output directory at `build()` time so the
//! engine can assume both are well-formed.

pub mod builder;
pub mod getters;
pub mod types;

pub use builder::ScrapeConfigBuilder;
pub use types::ScrapeConfig;
