use std::time::Duration;

/// Default readiness endpoint exposed by the Envoy admin listener.
pub const DEFAULT_SERVER_INFO_URL: &str = "http://localhost:15000/server_info";
/// Default shutdown endpoint exposed by the Istio pilot agent.
pub const DEFAULT_QUIT_URL: &str = "http://localhost:15020/quitquitquit";

/// Configures per-request timeout and the fixed-delay retry budget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Per-request timeout in milliseconds. Zero disables the deadline.
    pub timeout_ms: u64,
    /// Fixed pause between attempts in milliseconds.
    pub retry_delay_ms: u64,
    /// Attempt ceiling. Zero fails before the first request.
    pub max_retries: usize,
}

impl RetryPolicy {
    /// Builds a policy from durations, rounding sub-millisecond remainders up.
    pub fn new(timeout: Duration, retry_delay: Duration, max_retries: usize) -> Self {
        Self {
            timeout_ms: duration_to_ms(timeout),
            retry_delay_ms: duration_to_ms(retry_delay),
            max_retries,
        }
    }

    /// `None` when requests run without a deadline.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout_ms: 1_000,
            retry_delay_ms: 1_000,
            max_retries: 60,
        }
    }
}

fn duration_to_ms(duration: Duration) -> u64 {
    let mut millis = duration.as_millis();
    if duration.subsec_nanos() % 1_000_000 != 0 {
        millis += 1;
    }
    u64::try_from(millis).unwrap_or(u64::MAX)
}

/// Control endpoints of the sidecar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoints {
    /// `GET` target polled until the proxy reports `LIVE`.
    pub server_info_url: String,
    /// `POST` target that asks the proxy to exit.
    pub quit_url: String,
}

impl Endpoints {
    /// Builds endpoints from the admin and agent base URLs.
    ///
    /// Example: `("http://127.0.0.1:15000", "http://127.0.0.1:15020")` →
    /// `http://127.0.0.1:15000/server_info` and `http://127.0.0.1:15020/quitquitquit`
    pub fn from_bases(admin_base: impl AsRef<str>, agent_base: impl AsRef<str>) -> Self {
        Self {
            server_info_url: format!("{}/server_info", admin_base.as_ref().trim_end_matches('/')),
            quit_url: format!("{}/quitquitquit", agent_base.as_ref().trim_end_matches('/')),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            server_info_url: DEFAULT_SERVER_INFO_URL.to_owned(),
            quit_url: DEFAULT_QUIT_URL.to_owned(),
        }
    }
}
