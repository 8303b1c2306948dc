//! Deduplication sets for pages and images.

use dashmap::DashSet;

/// A set of addresses already scheduled within one scrape invocation.
///
/// `DashSet` provides concurrent access without an outer lock, and its
/// `insert` is a single atomic membership-check-and-insert. That atomicity
/// is load-bearing: a separate contains-then-add would let two tasks
/// observe absence simultaneously and both schedule the same address,
/// which in a cyclic link graph means unbounded task growth.
#[derive(Debug, Default)]
pub struct VisitedSet {
    inner: DashSet<String>,
}

impl VisitedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically insert `key`, returning true iff it was not already present.
    ///
    /// The caller that receives `true` owns scheduling for this address;
    /// every other caller must skip it.
    pub fn check_and_insert(&self, key: &str) -> bool {
        self.inner.insert(key.to_owned())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn first_insert_wins() {
        let set = VisitedSet::new();
        assert!(set.check_and_insert("https://a.com/"));
        assert!(!set.check_and_insert("https://a.com/"));
        assert_eq!(set.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_inserts_admit_exactly_one_winner() {
        let set = Arc::new(VisitedSet::new());
        let mut handles = Vec::new();
        for _ in 0..32 {
            let set = Arc::clone(&set);
            handles.push(tokio::spawn(async move {
                set.check_and_insert("https://a.com/page")
            }));
        }
        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
        assert_eq!(set.len(), 1);
    }
}
