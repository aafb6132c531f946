//! Server configuration.

use anyhow::{bail, Context};
use std::env;
use std::net::SocketAddr;
use std::ops::Add;
use std::time::Duration;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Server configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Port to bind to (default: 8080, also used when empty)
    /// - `UPSTREAM_TIMEOUT_SECS`: Timeout for calls to the aggregator (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        let port = non_empty("PORT").unwrap_or_else(|| DEFAULT_PORT.into());
        let bind_addr: SocketAddr = "0.0.0.0:"
            .to_string()
            .add(port.trim())
            .parse()
            .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?;

        let upstream_timeout = match non_empty("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().with_context(|| {
                    format!("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
                })?;
                if secs == 0 {
                    bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_addr,
            upstream_timeout,
        })
    }
}
