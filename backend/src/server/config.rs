//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

/// Immutable configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    base_path: String,
}

impl ServerConfig {
    /// Construct a server configuration from explicit values.
    ///
    /// The base path is normalized: trailing slashes are dropped and a
    /// non-empty path gains a leading slash, so it can be prefixed onto
    /// route paths verbatim.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, base_path: &str) -> Self {
        Self {
            bind_addr,
            base_path: normalize_base_path(base_path),
        }
    }

    /// Read configuration from the environment.
    ///
    /// `BIND_ADDR` (default `0.0.0.0:8080`) and `BASE_PATH` (default empty)
    /// are consulted.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR '{bind_addr}': {e}")))?;
        let base_path = env::var("BASE_PATH").unwrap_or_default();
        Ok(Self::new(bind_addr, &base_path))
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Normalized base path the API is mounted under.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.base_path.as_str()
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
