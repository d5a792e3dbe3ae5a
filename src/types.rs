use std::fmt;

/// Outcome of a single readiness check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Request could not be sent or timed out.
    TransportError(String),
    /// Response arrived but its body could not be read.
    BodyReadError(String),
    /// Body is not a JSON object with a string `state`.
    MalformedPayload(String),
    /// Proxy answered with a state other than `LIVE`.
    NotLive(String),
    Live,
}

/// Outcome of a single quit request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignalOutcome {
    TransportError(String),
    /// Proxy answered with a non-200 status.
    Rejected(u16),
    Acknowledged,
}

/// Which handshake operation an attempt belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Wait,
    Close,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Wait => "wait",
            Operation::Close => "close",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an attempt did not complete the handshake.
///
/// Variants belong to exactly one [`Operation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// `GET /server_info` could not be sent or timed out.
    WaitTransport(String),
    BodyRead(String),
    MalformedPayload(String),
    NotLive(String),
    /// `POST /quitquitquit` could not be sent or timed out.
    CloseTransport(String),
    Rejected(u16),
}

impl FailureReason {
    pub fn operation(&self) -> Operation {
        match self {
            FailureReason::WaitTransport(_)
            | FailureReason::BodyRead(_)
            | FailureReason::MalformedPayload(_)
            | FailureReason::NotLive(_) => Operation::Wait,
            FailureReason::CloseTransport(_) | FailureReason::Rejected(_) => Operation::Close,
        }
    }

    /// Stable event name used in log lines.
    pub fn event_name(&self) -> &'static str {
        match self {
            FailureReason::WaitTransport(_) => "wait_client_get",
            FailureReason::BodyRead(_) => "wait_read_body",
            FailureReason::MalformedPayload(_) => "wait_json_decode",
            FailureReason::NotLive(_) => "wait_server_response_state",
            FailureReason::CloseTransport(_) => "close_client_post",
            FailureReason::Rejected(_) => "close_response_status",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::WaitTransport(detail)
            | FailureReason::BodyRead(detail)
            | FailureReason::MalformedPayload(detail)
            | FailureReason::CloseTransport(detail) => write!(f, "error={detail}"),
            FailureReason::NotLive(state) => write!(f, "state={state}"),
            FailureReason::Rejected(status) => write!(f, "status={status}"),
        }
    }
}

impl ProbeOutcome {
    /// `None` when the proxy is live.
    pub fn into_failure(self) -> Option<FailureReason> {
        match self {
            ProbeOutcome::TransportError(detail) => Some(FailureReason::WaitTransport(detail)),
            ProbeOutcome::BodyReadError(detail) => Some(FailureReason::BodyRead(detail)),
            ProbeOutcome::MalformedPayload(detail) => Some(FailureReason::MalformedPayload(detail)),
            ProbeOutcome::NotLive(state) => Some(FailureReason::NotLive(state)),
            ProbeOutcome::Live => None,
        }
    }
}

impl SignalOutcome {
    /// `None` when the quit request was acknowledged.
    pub fn into_failure(self) -> Option<FailureReason> {
        match self {
            SignalOutcome::TransportError(detail) => Some(FailureReason::CloseTransport(detail)),
            SignalOutcome::Rejected(status) => Some(FailureReason::Rejected(status)),
            SignalOutcome::Acknowledged => None,
        }
    }
}

/// A retried attempt, handed to the [`RetryObserver`](crate::RetryObserver).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryEvent {
    /// 1-based attempt number.
    pub attempt: usize,
    pub max_retries: usize,
    pub reason: FailureReason,
}

impl RetryEvent {
    pub fn operation(&self) -> Operation {
        self.reason.operation()
    }

    pub fn event_name(&self) -> &'static str {
        self.reason.event_name()
    }
}

impl fmt::Display for RetryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, retries={}, max_retries={}, {}",
            self.event_name(),
            self.attempt,
            self.max_retries,
            self.reason
        )
    }
}
