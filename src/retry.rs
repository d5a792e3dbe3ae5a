use std::time::Duration;

use tokio::time::sleep;

/// Fixed-delay attempt counter shared by the readiness and quit loops.
///
/// Attempts are numbered from 1. [`AttemptBudget::next_attempt`] returns
/// `None` once the counter passes `max_retries`.
#[derive(Debug)]
pub(crate) struct AttemptBudget {
    attempt: usize,
    max_retries: usize,
    delay: Duration,
}

impl AttemptBudget {
    pub(crate) fn new(max_retries: usize, delay: Duration) -> Self {
        Self {
            attempt: 0,
            max_retries,
            delay,
        }
    }

    pub(crate) fn next_attempt(&mut self) -> Option<usize> {
        self.attempt = self.attempt.saturating_add(1);
        (self.attempt <= self.max_retries).then_some(self.attempt)
    }

    pub(crate) fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Sleeps the constant delay. No backoff, no jitter.
    pub(crate) async fn pause(&self) {
        sleep(self.delay).await;
    }
}
