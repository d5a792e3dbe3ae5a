//! Wires the sidecar handshake into a process lifecycle.
//!
//! ```sh
//! ISTIO_PROXY_ENABLED=true RUST_LOG=debug cargo run --example lifecycle
//! ```

use std::time::Duration;

use sidecar_lifecycle::{RetryPolicy, SidecarProxy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let policy = RetryPolicy::new(Duration::from_secs(1), Duration::from_secs(1), 30);
    let proxy = SidecarProxy::from_env(policy);
    tracing::info!(enabled = proxy.is_enabled(), "sidecar handshake configured");

    proxy.wait().await?;
    tracing::info!("sidecar ready, serving until ctrl-c");

    tokio::signal::ctrl_c().await?;

    if let Err(err) = proxy.close().await {
        tracing::error!(error = %err, "sidecar did not acknowledge shutdown");
        return Err(err.into());
    }
    Ok(())
}
