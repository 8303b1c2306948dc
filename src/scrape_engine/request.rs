//! Asynchronous wrapper for a pending scrape operation.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

use crate::scrape_engine::types::ScrapeOutcome;

/// A domain-specific type representing a pending scrape.
/// This wraps a oneshot receiver and implements Future so it can be awaited.
pub struct ScrapeRequest {
    receiver: oneshot::Receiver<ScrapeOutcome>,
}

impl ScrapeRequest {
    /// Create a new `ScrapeRequest` from a oneshot receiver
    #[must_use]
    pub fn new(receiver: oneshot::Receiver<ScrapeOutcome>) -> Self {
        Self { receiver }
    }
}

/// Implement Future so users can simply .await the `ScrapeRequest`
impl Future for ScrapeRequest {
    type Output = ScrapeOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // The sending task was dropped before reporting; treat the
            // scrape as abandoned rather than surfacing a channel error.
            Poll::Ready(Err(_)) => Poll::Ready(ScrapeOutcome::Interrupted),
            Poll::Pending => Poll::Pending,
        }
    }
}
