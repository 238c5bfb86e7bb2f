//! Client configuration.
//!
//! Everything the provider clients need is threaded in through [`Config`];
//! nothing is read from the process environment at call time.

use std::time::Duration;

/// Default base URL of the Deezer public API.
pub const DEFAULT_DEEZER_BASE_URL: &str = "https://api.deezer.com/";

/// Default base URL of the Discogs API.
pub const DEFAULT_DISCOGS_BASE_URL: &str = "https://api.discogs.com/";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration shared by the provider clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the track catalog, always ending in `/`.
    pub deezer_base_url: String,
    /// Base URL of the artist catalog, always ending in `/`.
    pub discogs_base_url: String,
    /// Discogs personal access token, forwarded verbatim.
    pub discogs_token: String,
    /// Upper bound for every outbound request.
    pub request_timeout: Duration,
    /// User-Agent header sent to both providers.
    pub user_agent: String,
}

impl Config {
    /// Create a configuration with default endpoints and the given token.
    pub fn new<S: Into<String>>(discogs_token: S) -> Self {
        Self {
            deezer_base_url: DEFAULT_DEEZER_BASE_URL.to_string(),
            discogs_base_url: DEFAULT_DISCOGS_BASE_URL.to_string(),
            discogs_token: discogs_token.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }

    /// Override the track catalog base URL.
    pub fn with_deezer_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.deezer_base_url = normalize_base_url(url.into());
        self
    }

    /// Override the artist catalog base URL.
    pub fn with_discogs_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.discogs_base_url = normalize_base_url(url.into());
        self
    }

    /// Override the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override the User-Agent header.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Make sure endpoint paths can be appended directly.
fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
