//! Quiescence detection for dynamically spawned task graphs.

use std::time::Duration;
use tokio::sync::watch;

/// Counts tasks that have been queued but not yet finished.
///
/// Termination must be detected exactly when no task is running and none
/// is queued, in the presence of tasks that spawn further tasks. The
/// protocol that makes this sound:
///
/// - [`task_queued`](Self::task_queued) is called *before* a task is
///   handed to the runtime, from the submitting task's own context, so
///   the count can never transiently touch zero while work remains;
/// - [`task_complete`](Self::task_complete) is called only after a task's
///   full body, including all of its own submissions, has returned.
///
/// The waiter re-checks the zero predicate on every change notification
/// rather than treating a wakeup as completion.
#[derive(Debug)]
pub struct TaskCounter {
    pending: watch::Sender<usize>,
}

impl TaskCounter {
    #[must_use]
    pub fn new() -> Self {
        let (pending, _) = watch::channel(0);
        Self { pending }
    }

    /// Record a task about to be submitted. Call before spawning.
    pub fn task_queued(&self) {
        self.pending.send_modify(|count| *count += 1);
    }

    /// Record a finished task. Call exactly once per queued task, on
    /// every exit path including early failure.
    pub fn task_complete(&self) {
        self.pending.send_modify(|count| {
            debug_assert!(*count > 0, "task_complete without a matching task_queued");
            *count -= 1;
        });
    }

    /// Current number of queued-but-unfinished tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        *self.pending.borrow()
    }

    /// Block until the pending count returns to zero, or `timeout` elapses.
    ///
    /// Returns true on quiescence, false on timeout.
    pub async fn wait_idle(&self, timeout: Duration) -> bool {
        let mut rx = self.pending.subscribe();
        tokio::time::timeout(timeout, rx.wait_for(|count| *count == 0))
            .await
            .is_ok()
    }
}

impl Default for TaskCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn idle_when_nothing_was_queued() {
        let counter = TaskCounter::new();
        assert!(counter.wait_idle(Duration::from_millis(10)).await);
    }

    #[tokio::test]
    async fn times_out_while_a_task_is_pending() {
        let counter = TaskCounter::new();
        counter.task_queued();
        assert!(!counter.wait_idle(Duration::from_millis(50)).await);
        assert_eq!(counter.pending(), 1);
    }

    #[tokio::test]
    async fn wakes_when_the_last_task_completes() {
        let counter = Arc::new(TaskCounter::new());
        counter.task_queued();
        counter.task_queued();

        let worker = Arc::clone(&counter);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            worker.task_complete();
            tokio::time::sleep(Duration::from_millis(20)).await;
            worker.task_complete();
        });

        assert!(counter.wait_idle(Duration::from_secs(5)).await);
        assert_eq!(counter.pending(), 0);
    }

    #[tokio::test]
    async fn completion_before_wait_is_not_missed() {
        let counter = TaskCounter::new();
        counter.task_queued();
        counter.task_complete();
        assert!(counter.wait_idle(Duration::from_millis(10)).await);
    }
}
