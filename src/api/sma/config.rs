use std::time::Duration;

use bon::Builder;
use reqwest::Url;

use crate::api::sma::error::{Error, Result};

/// Connection settings, taken as is from the host application.
#[must_use]
#[derive(Clone, Builder, derive_more::Debug)]
pub struct ClientConfig {
    /// Bare host (optionally with a port) or a URL: only the authority is used.
    #[builder(into)]
    pub host: String,

    #[builder(into)]
    pub username: Option<String>,

    #[builder(into)]
    #[debug(skip)]
    pub password: Option<String>,

    #[builder(default = true)]
    pub use_ssl: bool,

    #[builder(default = true)]
    pub verify_ssl: bool,

    #[builder(default = Duration::from_secs(10))]
    pub request_timeout: Duration,

    /// Additional attempts on transient failures.
    #[builder(default = 3)]
    pub request_retries: u32,
}

impl ClientConfig {
    /// `host[:port]` part of [`ClientConfig::host`].
    ///
    /// People tend to paste `https://sma.local/` instead of `sma.local`.
    #[must_use]
    pub fn authority(&self) -> &str {
        let host = self.host.trim();
        let host = host.split_once("://").map_or(host, |(_, rest)| rest);
        host.split(['/', '?', '#']).next().unwrap_or(host)
    }

    pub fn base_url(&self) -> Result<Url> {
        let scheme = if self.use_ssl { "https" } else { "http" };
        let authority = self.authority();
        if authority.is_empty() {
            return Err(Error::Configuration("host is empty"));
        }
        Url::parse(&format!("{scheme}://{authority}/api/v1"))
            .map_err(|error| Error::Client(format!("invalid host `{authority}`: {error}")))
    }
}
