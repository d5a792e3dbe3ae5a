use std::fmt;
use std::sync::Arc;

use reqwest::{header, RequestBuilder, StatusCode};

use crate::{
    observer::{RetryObserver, TracingObserver},
    retry::AttemptBudget,
    wire::ServerInfo,
    Endpoints, FailureReason, ProbeOutcome, Result, RetryEvent, RetryPolicy, SidecarError,
    SignalOutcome,
};

#[derive(Clone)]
/// HTTP client for the sidecar readiness and quit endpoints.
pub struct SidecarClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    policy: RetryPolicy,
    observer: Arc<dyn RetryObserver>,
}

impl fmt::Debug for SidecarClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidecarClient")
            .field("endpoints", &self.endpoints)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl SidecarClient {
    /// Creates a client for the default local sidecar endpoints.
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::default(),
            policy,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Points the client at non-default control endpoints.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Replaces the observer notified on every retried attempt.
    pub fn with_observer(mut self, observer: impl RetryObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Uses a caller-provided `reqwest` client, e.g. to share a pool.
    ///
    /// The per-request timeout from [`RetryPolicy`] still applies.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Blocks until the proxy reports `LIVE`.
    ///
    /// Returns [`SidecarError::WaitMaxRetriesExceeded`] once
    /// `max_retries` attempts have failed. The success path returns without
    /// sleeping.
    pub async fn wait(&self) -> Result<()> {
        let mut budget = AttemptBudget::new(self.policy.max_retries, self.policy.retry_delay());
        loop {
            let Some(attempt) = budget.next_attempt() else {
                #[cfg(feature = "tracing")]
                tracing::error!(max_retries = budget.max_retries(), "wait_max_retries_exceeded");
                return Err(SidecarError::WaitMaxRetriesExceeded {
                    max_retries: budget.max_retries(),
                });
            };

            match self.probe().await.into_failure() {
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::info!(attempt, "sidecar_live");
                    return Ok(());
                }
                Some(reason) => {
                    self.report(attempt, reason);
                    budget.pause().await;
                }
            }
        }
    }

    /// Asks the proxy to exit and blocks until it answers `200 OK`.
    ///
    /// Returns [`SidecarError::CloseMaxRetriesExceeded`] once
    /// `max_retries` attempts have failed.
    pub async fn close(&self) -> Result<()> {
        let mut budget = AttemptBudget::new(self.policy.max_retries, self.policy.retry_delay());
        loop {
            let Some(attempt) = budget.next_attempt() else {
                #[cfg(feature = "tracing")]
                tracing::error!(max_retries = budget.max_retries(), "close_max_retries_exceeded");
                return Err(SidecarError::CloseMaxRetriesExceeded {
                    max_retries: budget.max_retries(),
                });
            };

            match self.signal_quit().await.into_failure() {
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::info!(attempt, "sidecar_quit_acknowledged");
                    return Ok(());
                }
                Some(reason) => {
                    self.report(attempt, reason);
                    budget.pause().await;
                }
            }
        }
    }

    /// Performs one readiness check without retrying.
    ///
    /// Only the body decides the outcome; the status code is ignored.
    pub async fn probe(&self) -> ProbeOutcome {
        let response = self
            .with_timeout(self.http.get(&self.endpoints.server_info_url))
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => return ProbeOutcome::TransportError(err.to_string()),
        };

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return ProbeOutcome::BodyReadError(err.to_string()),
        };

        match ServerInfo::decode(&body) {
            Ok(info) if info.is_live() => {
                #[cfg(feature = "tracing")]
                if let Some(version) = info.version.as_deref() {
                    tracing::debug!(version, "sidecar server info");
                }
                ProbeOutcome::Live
            }
            Ok(info) => ProbeOutcome::NotLive(info.state),
            Err(err) => ProbeOutcome::MalformedPayload(err),
        }
    }

    /// Sends one quit request without retrying.
    pub async fn signal_quit(&self) -> SignalOutcome {
        let response = self
            .with_timeout(self.http.post(&self.endpoints.quit_url))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await;

        match response {
            Ok(response) if response.status() == StatusCode::OK => SignalOutcome::Acknowledged,
            Ok(response) => SignalOutcome::Rejected(response.status().as_u16()),
            Err(err) => SignalOutcome::TransportError(err.to_string()),
        }
    }

    /// A zero `timeout_ms` leaves the request without a deadline.
    fn with_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        match self.policy.timeout() {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    fn report(&self, attempt: usize, reason: FailureReason) {
        let event = RetryEvent {
            attempt,
            max_retries: self.policy.max_retries,
            reason,
        };
        self.observer.on_retry(&event);
    }
}
