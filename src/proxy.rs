use crate::{config, Result, RetryPolicy, SidecarClient};

/// Sidecar handshake as seen by the rest of the process.
///
/// Call sites use [`SidecarProxy::wait`] and [`SidecarProxy::close`]
/// unconditionally; in deployments without a sidecar the
/// [`SidecarProxy::Disabled`] variant turns both into no-ops.
#[derive(Clone, Debug)]
pub enum SidecarProxy {
    /// Talks to the sidecar over HTTP.
    Enabled(SidecarClient),
    /// No sidecar: every operation succeeds immediately without I/O.
    Disabled,
}

impl SidecarProxy {
    /// Selects the real client when `enabled` is true.
    pub fn new(enabled: bool, policy: RetryPolicy) -> Self {
        if enabled {
            Self::Enabled(SidecarClient::new(policy))
        } else {
            Self::Disabled
        }
    }

    /// Reads `ISTIO_PROXY_ENABLED` once and selects the variant.
    ///
    /// Absent or unparsable values yield [`SidecarProxy::Disabled`].
    pub fn from_env(policy: RetryPolicy) -> Self {
        let enabled = config::enabled_from_env();
        #[cfg(feature = "tracing")]
        tracing::debug!(enabled, env = config::ENABLED_ENV_VAR, "sidecar handshake toggle");
        Self::new(enabled, policy)
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Waits for the sidecar to become ready. See [`SidecarClient::wait`].
    pub async fn wait(&self) -> Result<()> {
        match self {
            Self::Enabled(client) => client.wait().await,
            Self::Disabled => Ok(()),
        }
    }

    /// Asks the sidecar to shut down. See [`SidecarClient::close`].
    pub async fn close(&self) -> Result<()> {
        match self {
            Self::Enabled(client) => client.close().await,
            Self::Disabled => Ok(()),
        }
    }
}

impl From<SidecarClient> for SidecarProxy {
    fn from(client: SidecarClient) -> Self {
        Self::Enabled(client)
    }
}

#[cfg(test)]
mod tests {
    use super::SidecarProxy;
    use crate::{RetryPolicy, SidecarClient};

    #[test]
    fn toggle_selects_variant() {
        assert!(SidecarProxy::new(true, RetryPolicy::default()).is_enabled());
        assert!(!SidecarProxy::new(false, RetryPolicy::default()).is_enabled());
        assert!(SidecarProxy::from(SidecarClient::new(RetryPolicy::default())).is_enabled());
    }

    #[tokio::test]
    async fn disabled_operations_succeed_immediately() {
        let proxy = SidecarProxy::Disabled;
        assert_eq!(proxy.wait().await, Ok(()));
        assert_eq!(proxy.close().await, Ok(()));
    }
}
