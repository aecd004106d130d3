// Shared transport configuration for building reqwest::Client instances.
//
// REST calls and event streams share one client. The per-request timeout
// applies to REST calls only; streams are bounded by the inactivity timeout
// instead, which the stream reader enforces per frame.

use std::time::Duration;

use crate::error::Error;

/// Default inactivity timeout on an open event stream.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Total timeout for one-shot REST requests.
    pub timeout: Duration,

    /// Longest gap allowed between two stream frames before the stream is
    /// reported as timed out.
    pub read_timeout: Duration,

    pub connect_timeout: Duration,

    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            read_timeout: DEFAULT_READ_TIMEOUT,
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("homeconnect-rs/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// No total timeout is set on the client itself; REST requests apply
    /// [`timeout`](Self::timeout) per request so streams can stay open.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(Error::Transport)
    }
}
