//! Retry reporting hooks.
//!
//! Every attempt that fails without exhausting the budget is passed to a
//! [`RetryObserver`]. The observer never influences control flow.

use crate::RetryEvent;

/// Receives one call per retried attempt.
///
/// Closures of the form `Fn(&RetryEvent)` implement this trait.
pub trait RetryObserver: Send + Sync {
    fn on_retry(&self, event: &RetryEvent);
}

impl<F> RetryObserver for F
where
    F: Fn(&RetryEvent) + Send + Sync,
{
    fn on_retry(&self, event: &RetryEvent) {
        self(event)
    }
}

/// Default observer: one `warn` line per retried attempt.
///
/// Without the `tracing` feature this observer is silent.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl RetryObserver for TracingObserver {
    fn on_retry(&self, event: &RetryEvent) {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            operation = event.operation().as_str(),
            attempt = event.attempt,
            max_retries = event.max_retries,
            reason = %event.reason,
            "{}",
            event.event_name()
        );

        #[cfg(not(feature = "tracing"))]
        let _ = event;
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RetryObserver for NoopObserver {
    fn on_retry(&self, _event: &RetryEvent) {}
}
