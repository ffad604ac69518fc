// ABOUTME: Configuration options for the resolver client and the fluent ClientBuilder.
// ABOUTME: Defaults mirror the platform conventions: mobile UA, 10s connect / 30s total timeouts.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::client::Client;
use crate::logger::{Logger, NoopLogger};

/// The User-Agent sent with both requests, mimicking a mobile browser.
/// The share page serves the embedded ROUTER_DATA payload only to mobile clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) EdgiOS/121.0.2277.107 Version/17.0 Mobile/15E148 Safari/604.1";

/// Canonical page URL prefix; the numeric video id is appended.
pub const DEFAULT_PAGE_URL_PREFIX: &str = "https://www.iesdouyin.com/share/video/";

/// Configuration options for the resolver client.
#[derive(Clone)]
pub struct Options {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: String,
    pub page_url_prefix: String,
    pub logger: Arc<dyn Logger>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_url_prefix: DEFAULT_PAGE_URL_PREFIX.to_string(),
            logger: Arc::new(NoopLogger),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("page_url_prefix", &self.page_url_prefix)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the per-request connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.opts.connect_timeout = timeout;
        self
    }

    /// Set the per-request total timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the canonical page URL prefix the video id is appended to.
    pub fn page_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.opts.page_url_prefix = prefix.into();
        self
    }

    /// Inject a logger for the handler boundary.
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.opts.logger = logger;
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_platform_policy() {
        let opts = Options::default();
        assert_eq!(opts.connect_timeout, Duration::from_secs(10));
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert!(opts.user_agent.contains("iPhone"));
        assert_eq!(opts.page_url_prefix, "https://www.iesdouyin.com/share/video/");
    }

    #[test]
    fn builder_overrides_prefix() {
        let opts = ClientBuilder::new()
            .page_url_prefix("http://127.0.0.1:9999/share/video/")
            .opts;
        assert_eq!(opts.page_url_prefix, "http://127.0.0.1:9999/share/video/");
    }
}
