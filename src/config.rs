//! Connection configuration

use std::time::Duration;

/// Default prefix for the metadata API.
pub const DEFAULT_PREFIX: &str = "https://api.dropbox.com/1";

/// Default prefix for the content (upload/download) API.
pub const DEFAULT_CONTENT_PREFIX: &str = "https://api-content.dropbox.com/1";

/// Logical API audience. Selects both the URL prefix and the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Main,
    Content,
}

/// Settings shared by every request made through a [`Connection`](crate::Connection).
#[derive(Debug, Clone)]
pub struct Config {
    pub prefix: String,
    pub content_prefix: String,
    pub user_agent: String,
    /// Per-request timeout applied by [`ReqwestToken`](crate::ReqwestToken).
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            content_prefix: DEFAULT_CONTENT_PREFIX.to_string(),
            user_agent: concat!("dropbox-api/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    pub fn with_content_prefix(mut self, prefix: &str) -> Self {
        self.content_prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// URL prefix for the given endpoint.
    pub fn prefix_for(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Main => &self.prefix,
            Endpoint::Content => &self.content_prefix,
        }
    }
}
