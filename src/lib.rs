//! `sidecar-lifecycle` coordinates an application with its service-mesh
//! proxy sidecar (Istio / Envoy).
//!
//! Two operations cover the whole lifecycle:
//! - [`SidecarProxy::wait`] polls `GET /server_info` until the proxy reports
//!   `LIVE`, so the application does not start before traffic can flow.
//! - [`SidecarProxy::close`] posts to `/quitquitquit` so the proxy exits
//!   together with the application.
//!
//! Both retry with a constant delay up to a fixed attempt ceiling
//! ([`RetryPolicy`]). Only exhausting that ceiling is returned as an error;
//! individual failed attempts go to a [`RetryObserver`].
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use sidecar_lifecycle::{RetryPolicy, SidecarProxy};
//!
//! # async fn run() -> sidecar_lifecycle::Result<()> {
//! let policy = RetryPolicy::new(Duration::from_secs(1), Duration::from_secs(1), 60);
//! let proxy = SidecarProxy::from_env(policy);
//!
//! proxy.wait().await?;
//! // ... serve traffic ...
//! proxy.close().await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
mod error;
pub mod observer;
mod options;
mod proxy;
mod retry;
mod types;
mod wire;

pub use client::SidecarClient;
pub use error::SidecarError;
pub use observer::{NoopObserver, RetryObserver, TracingObserver};
pub use options::{Endpoints, RetryPolicy, DEFAULT_QUIT_URL, DEFAULT_SERVER_INFO_URL};
pub use proxy::SidecarProxy;
pub use types::{FailureReason, Operation, ProbeOutcome, RetryEvent, SignalOutcome};
pub use wire::LIVE_STATE;

pub type Result<T> = std::result::Result<T, SidecarError>;
