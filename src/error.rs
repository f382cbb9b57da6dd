//! Host startup and serving errors.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable was set to something unparseable.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Leptos options could not be loaded (missing `[package.metadata.leptos]`
    /// or `LEPTOS_*` variables).
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
