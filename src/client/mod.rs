//! Dropbox API client
//!
//! Verb wrappers (`get`, `get_raw`, `post`, `put`) over a per-endpoint
//! [`Token`], with every response classified by status code into a typed
//! [`Error`].

pub mod error;
pub mod query;
pub mod response;
pub mod token;
pub(crate) mod wire;

mod requests;


use crate::config::{Config, Endpoint};

pub use error::{BoxError, Error};
pub use query::{query, request_url};
pub use requests::{RequestOptions, handle_response, request};
pub use response::{Response, ResponseBody};
pub use token::{Payload, ReqwestToken, Token};

// ── Connection ──────────────────────────────────────────────────────────────

/// Connection to the Dropbox API.
///
/// Holds the configuration and one token per [`Endpoint`]. Carries no
/// mutable state, so it can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Connection<T> {
    config: Config,
    main: T,
    content: T,
}

impl<T: Token + Clone> Connection<T> {
    /// Create a connection that uses `token` for every endpoint.
    pub fn new(config: Config, token: T) -> Self {
        Self::with_tokens(config, token.clone(), token)
    }
}

impl<T: Token> Connection<T> {
    /// Create a connection with a separate token per endpoint.
    pub fn with_tokens(config: Config, main: T, content: T) -> Self {
        Self {
            config,
            main,
            content,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Token used for requests against `endpoint`.
    pub fn token(&self, endpoint: Endpoint) -> &T {
        match endpoint {
            Endpoint::Main => &self.main,
            Endpoint::Content => &self.content,
        }
    }
}

impl Connection<ReqwestToken> {
    /// Create a reqwest-backed connection authorized by `access_token`.
    pub fn from_access_token(config: Config, access_token: &str) -> Result<Self, Error> {
        let token = ReqwestToken::new(&config, access_token)?;
        Ok(Self::new(config, token))
    }
}
