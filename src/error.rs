/// Error type returned by this crate.
///
/// Only retry-budget exhaustion is surfaced. Per-attempt failures go to the
/// [`RetryObserver`](crate::RetryObserver) and are never wrapped here.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SidecarError {
    /// The proxy never reported `LIVE` within the retry budget.
    #[error("wait_max_retries_exceeded, max_retries={max_retries}")]
    WaitMaxRetriesExceeded { max_retries: usize },
    /// The proxy never acknowledged the quit request within the retry budget.
    #[error("close_max_retries_exceeded, max_retries={max_retries}")]
    CloseMaxRetriesExceeded { max_retries: usize },
}

#[cfg(test)]
mod tests {
    use super::SidecarError;

    #[test]
    fn display_keeps_machine_friendly_codes() {
        assert_eq!(
            SidecarError::WaitMaxRetriesExceeded { max_retries: 2 }.to_string(),
            "wait_max_retries_exceeded, max_retries=2"
        );
        assert_eq!(
            SidecarError::CloseMaxRetriesExceeded { max_retries: 7 }.to_string(),
            "close_max_retries_exceeded, max_retries=7"
        );
    }
}
